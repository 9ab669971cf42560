use chrono::{DateTime, Utc};

use business::domain::listing::query::TotalCount;
use business::domain::listing::state::ListState;
use business::domain::product::model::{Category, Product};

pub fn price(value: f64) -> String {
    format!("${:.2}", value)
}

fn timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn category_row(category: &Category) -> String {
    format!("{:<28} {}", category.id, category.name)
}

pub fn product_row(product: &Product) -> String {
    format!(
        "{:<28} {:<32} {:>10}  {}",
        product.id,
        product.name,
        price(product.price),
        product.category_name().unwrap_or("-")
    )
}

pub fn product_detail(product: &Product) -> String {
    let mut lines = vec![
        product.name.clone(),
        format!("  id:          {}", product.id),
        format!("  slug:        {}", product.slug),
        format!("  price:       {}", price(product.price)),
        format!(
            "  category:    {}",
            product.category_name().unwrap_or("-")
        ),
        format!("  created:     {}", timestamp(product.created_at)),
        format!("  updated:     {}", timestamp(product.updated_at)),
    ];
    if !product.description.is_empty() {
        lines.push(format!("  description: {}", product.description));
    }
    for image in &product.images {
        lines.push(format!("  image:       {}", image));
    }
    lines.join("\n")
}

pub fn listing_footer(state: &ListState) -> String {
    let mut footer = match (state.search_active(), state.total) {
        (true, _) => format!("{} search results (paging disabled)", state.products.len()),
        (false, TotalCount::Exact(total)) => format!(
            "Page {} of {} · {} products",
            state.query.page,
            state.page_count(),
            total
        ),
        (false, _) => format!("Page {} of {}", state.query.page, state.page_count()),
    };
    if let Some(category) = state.selected_category_name() {
        footer.push_str(&format!(" · category: {}", category));
    }
    if state.can_go_next() {
        footer.push_str(&format!(" · next: --page {}", state.query.page + 1));
    }
    footer
}
