use std::io::{self, BufRead, Write};

use anyhow::bail;

use business::domain::listing::query::ListQuery;
use business::domain::listing::state::ListStatus;
use business::domain::product::errors::{ProductError, ValidationError};
use business::domain::product::model::UpdateMethod;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::get_by_slug::GetProductBySlugParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::ImageUrls;

use crate::cli::{CreateArgs, ListArgs, UpdateArgs};
use crate::setup::dependency_injection::DependencyContainer;

use super::render;

pub async fn categories(container: &DependencyContainer) -> anyhow::Result<()> {
    container.require_session.execute()?;
    let categories = container.get_categories.execute().await?;
    if categories.is_empty() {
        println!("No categories");
    }
    for category in &categories {
        println!("{}", render::category_row(category));
    }
    Ok(())
}

pub async fn list(container: &DependencyContainer, args: ListArgs) -> anyhow::Result<()> {
    container.require_session.execute()?;
    let controller = &container.list;

    controller.load_categories().await;
    controller.replace_query(ListQuery {
        search_text: args.search,
        category: args.category,
        page: args.page.max(1),
        page_size: args.page_size,
    });
    controller.refresh().await;

    let state = controller.snapshot();
    if state.status == ListStatus::Error {
        bail!(
            state
                .error_message
                .unwrap_or_else(|| "Failed to load products".to_string())
        );
    }
    if state.products.is_empty() {
        println!("No products found");
    }
    for product in &state.products {
        println!("{}", render::product_row(product));
    }
    println!("{}", render::listing_footer(&state));
    Ok(())
}

pub async fn show(container: &DependencyContainer, slug: String) -> anyhow::Result<()> {
    container.require_session.execute()?;
    let product = container
        .get_by_slug
        .execute(GetProductBySlugParams { slug })
        .await?;
    println!("{}", render::product_detail(&product));
    Ok(())
}

pub async fn create(container: &DependencyContainer, args: CreateArgs) -> anyhow::Result<()> {
    container.require_session.execute()?;
    let images = collect_images(&args.images).map_err(ProductError::from)?;
    let product = container
        .create
        .execute(CreateProductParams {
            name: args.name,
            description: args.description,
            price: args.price,
            category_id: args.category,
            images,
        })
        .await?;
    println!("Created {} ({})", product.name, product.id);
    Ok(())
}

/// Flags left out keep the product's current values.
pub async fn update(container: &DependencyContainer, args: UpdateArgs) -> anyhow::Result<()> {
    container.require_session.execute()?;
    let current = container
        .get_by_slug
        .execute(GetProductBySlugParams {
            slug: args.slug.clone(),
        })
        .await?;

    let method = if args.patch {
        UpdateMethod::Patch
    } else {
        UpdateMethod::Replace
    };
    let product = container
        .update
        .execute(UpdateProductParams {
            id: current.id.clone(),
            name: args.name.unwrap_or(current.name.clone()),
            description: args.description.unwrap_or(current.description.clone()),
            price: args.price.unwrap_or_else(|| current.price.to_string()),
            category_id: args
                .category
                .or_else(|| current.category.as_ref().map(|c| c.id.clone())),
            image_url: args.image,
            method,
        })
        .await?;
    println!("Updated {} ({})", product.name, product.id);
    Ok(())
}

pub async fn delete(container: &DependencyContainer, id: String, yes: bool) -> anyhow::Result<()> {
    container.require_session.execute()?;
    let controller = &container.list;

    controller.request_delete(id.clone(), id.clone());
    if !yes && !confirm(&format!("Delete product {}? [y/N] ", id))? {
        controller.cancel_delete();
        println!("Cancelled");
        return Ok(());
    }

    if let Err(e) = controller.confirm_delete().await {
        let message = controller
            .snapshot()
            .error_message
            .unwrap_or_else(|| e.to_string());
        bail!(message);
    }
    println!("Deleted {}", id);
    Ok(())
}

/// Feeds each `--image` value through [`ImageUrls`] in the order given.
fn collect_images(raw: &[String]) -> Result<Vec<String>, ValidationError> {
    let mut images = ImageUrls::new();
    for url in raw {
        images.add(url)?;
    }
    Ok(images.into_vec())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|url| url.to_string()).collect()
    }

    #[test]
    fn should_collect_images_once_each_in_order() {
        let images = collect_images(&urls(&[
            " https://cdn.example.com/a.png",
            "https://cdn.example.com/b.png",
            "https://cdn.example.com/a.png ",
            "  ",
        ]))
        .unwrap();

        assert_eq!(
            images,
            urls(&["https://cdn.example.com/a.png", "https://cdn.example.com/b.png"])
        );
    }

    #[test]
    fn should_stop_at_first_invalid_image() {
        let err = collect_images(&urls(&["https://cdn.example.com/a.png", "not-a-url"]))
            .unwrap_err();

        assert_eq!(err, ValidationError::InvalidImageUrl);
        assert_eq!(
            ProductError::from(err).to_string(),
            "Image URL must be a valid link"
        );
    }
}
