use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use business::domain::product::gateway::PageRequest;

/// Characters `encodeURIComponent` leaves as they are.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const AUTH: &str = "/auth";
pub const CATEGORIES: &str = "/categories";
pub const PRODUCTS: &str = "/products";

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub fn products_page(request: &PageRequest) -> String {
    let mut path = format!(
        "{}?offset={}&limit={}",
        PRODUCTS, request.offset, request.limit
    );
    if let Some(category_id) = &request.category_id {
        path.push_str(&format!("&categoryId={}", encode_component(category_id)));
    }
    path
}

pub fn products_search(text: &str) -> String {
    format!("{}/search?searchedText={}", PRODUCTS, encode_component(text))
}

/// `/products/{slug}` for reads, `/products/{id}` for writes.
pub fn product(key: &str) -> String {
    format!("{}/{}", PRODUCTS, encode_component(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_second_page_path() {
        let request = PageRequest {
            offset: 10,
            limit: 10,
            category_id: None,
        };
        assert_eq!(products_page(&request), "/products?offset=10&limit=10");
    }

    #[test]
    fn should_append_category_only_when_selected() {
        let request = PageRequest {
            offset: 0,
            limit: 5,
            category_id: Some("cat 1".to_string()),
        };
        assert_eq!(
            products_page(&request),
            "/products?offset=0&limit=5&categoryId=cat%201"
        );
    }

    #[test]
    fn should_encode_search_text_like_a_uri_component() {
        assert_eq!(
            products_search("red hat"),
            "/products/search?searchedText=red%20hat"
        );
        assert_eq!(encode_component("a&b=c/d"), "a%26b%3Dc%2Fd");
        assert_eq!(encode_component("it's (ok)!*~"), "it's (ok)!*~".replace(' ', "%20"));
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn should_build_product_path() {
        assert_eq!(product("red-hat"), "/products/red-hat");
    }
}
