/// Client-side routes the access layer can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Products,
    ProductCreate,
    ProductDetail { slug: String },
    ProductEdit { slug: String },
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Login => "/login".to_string(),
            AppRoute::Products => "/products".to_string(),
            AppRoute::ProductCreate => "/products/create".to_string(),
            AppRoute::ProductDetail { slug } => format!("/products/{}", slug),
            AppRoute::ProductEdit { slug } => format!("/products/{}/edit", slug),
        }
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Port for whatever drives the visible route (router, terminal, test recorder).
pub trait Navigator: Send + Sync {
    /// Pushes a new route onto the history.
    fn navigate(&self, route: AppRoute);
    /// Replaces the current route, used for forced redirects.
    fn redirect(&self, route: AppRoute);
}
