use std::sync::Arc;

use logger::TracingLogger;
use storage::FileSessionStorage;

use http_api::{ApiClient, HttpAuthGateway, HttpCatalogGateway};

use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::logout::LogoutUseCaseImpl;
use business::application::auth::require_session::RequireSessionUseCaseImpl;
use business::application::catalog::cached_gateway::CachedCatalogGateway;
use business::application::listing::controller::ListController;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_slug::GetProductBySlugUseCaseImpl;
use business::application::product::get_categories::GetCategoriesUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::auth::use_cases::login::LoginUseCase;
use business::domain::auth::use_cases::logout::LogoutUseCase;
use business::domain::auth::use_cases::require_session::RequireSessionUseCase;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::get_by_slug::GetProductBySlugUseCase;
use business::domain::product::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::product::use_cases::update::UpdateProductUseCase;
use business::domain::session::store::SessionStore;

use crate::config::app_config::AppConfig;
use crate::navigator::TerminalNavigator;

pub struct DependencyContainer {
    pub session: Arc<SessionStore>,
    pub login: Arc<dyn LoginUseCase>,
    pub logout: Arc<dyn LogoutUseCase>,
    pub require_session: Arc<dyn RequireSessionUseCase>,
    pub get_categories: Arc<dyn GetCategoriesUseCase>,
    pub get_by_slug: Arc<dyn GetProductBySlugUseCase>,
    pub create: Arc<dyn CreateProductUseCase>,
    pub update: Arc<dyn UpdateProductUseCase>,
    pub list: ListController,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let navigator = Arc::new(TerminalNavigator::stdout());

        // Session
        let storage = Arc::new(FileSessionStorage::new(config.session.file.clone()));
        let session = Arc::new(SessionStore::restore(storage, logger.clone()));

        // Infrastructure adapters
        let client_config = config.api.client_config();
        let auth_gateway = Arc::new(HttpAuthGateway::new(client_config.clone(), logger.clone()));
        let api_client = Arc::new(ApiClient::new(
            client_config,
            session.clone(),
            navigator.clone(),
            logger.clone(),
        ));
        let catalog_gateway = Arc::new(CachedCatalogGateway::new(
            Arc::new(HttpCatalogGateway::new(api_client)),
            logger.clone(),
        ));

        // Auth use cases
        let login = Arc::new(LoginUseCaseImpl {
            gateway: auth_gateway,
            session: session.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        });
        let logout = Arc::new(LogoutUseCaseImpl {
            session: session.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        });
        let require_session = Arc::new(RequireSessionUseCaseImpl {
            session: session.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        });

        // Product use cases
        let get_categories = Arc::new(GetCategoriesUseCaseImpl {
            gateway: catalog_gateway.clone(),
            logger: logger.clone(),
        });
        let get_by_slug = Arc::new(GetProductBySlugUseCaseImpl {
            gateway: catalog_gateway.clone(),
            logger: logger.clone(),
        });
        let create = Arc::new(CreateProductUseCaseImpl {
            gateway: catalog_gateway.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        });
        let update = Arc::new(UpdateProductUseCaseImpl {
            gateway: catalog_gateway.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        });
        let delete = Arc::new(DeleteProductUseCaseImpl {
            gateway: catalog_gateway.clone(),
            logger: logger.clone(),
        });
        let list_products = Arc::new(ListProductsUseCaseImpl {
            gateway: catalog_gateway,
            logger: logger.clone(),
        });

        let list = ListController::new(
            list_products,
            get_categories.clone(),
            delete,
            logger,
            config.listing.debounce,
        );

        Self {
            session,
            login,
            logout,
            require_session,
            get_categories,
            get_by_slug,
            create,
            update,
            list,
        }
    }
}
