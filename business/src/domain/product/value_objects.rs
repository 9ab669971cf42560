use super::errors::ValidationError;
use super::model::Category;
use super::validation::is_absolute_url;

/// Category selection of the product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Id(String),
}

impl CategoryFilter {
    /// The `categoryId` query parameter, absent for [`CategoryFilter::All`].
    pub fn as_param(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Id(id) => Some(id.as_str()),
        }
    }

    pub fn matches(&self, category: Option<&Category>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Id(id) => category.is_some_and(|c| &c.id == id),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Id(id) => write!(f, "{}", id),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(CategoryFilter::All),
            id => Ok(CategoryFilter::Id(id.to_string())),
        }
    }
}

/// Allowed page sizes of the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Fifteen,
    Twenty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Fifteen,
        PageSize::Twenty,
    ];

    pub fn value(self) -> u32 {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Fifteen => 15,
            PageSize::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            15 => Ok(PageSize::Fifteen),
            20 => Ok(PageSize::Twenty),
            _ => Err(format!("Invalid page size: {}", value)),
        }
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Ordered, de-duplicated image URLs entered one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUrls(Vec<String>);

impl ImageUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URL after trimming it. Blank input is ignored and duplicates are kept once.
    pub fn add(&mut self, raw: &str) -> Result<(), ValidationError> {
        let url = raw.trim();
        if url.is_empty() {
            return Ok(());
        }
        if !is_absolute_url(url) {
            return Err(ValidationError::InvalidImageUrl);
        }
        if !self.0.iter().any(|existing| existing == url) {
            self.0.push(url.to_string());
        }
        Ok(())
    }

    pub fn remove(&mut self, url: &str) {
        self.0.retain(|existing| existing != url);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_all_and_ids_as_category_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "cat1".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Id("cat1".to_string())
        );
    }

    #[test]
    fn should_match_only_selected_category() {
        let shoes = Category {
            id: "cat1".to_string(),
            name: "Shoes".to_string(),
        };
        let filter = CategoryFilter::Id("cat1".to_string());

        assert!(filter.matches(Some(&shoes)));
        assert!(!filter.matches(None));
        assert!(!CategoryFilter::Id("cat2".to_string()).matches(Some(&shoes)));
        assert!(CategoryFilter::All.matches(None));
    }

    #[test]
    fn should_accept_only_known_page_sizes() {
        for size in PageSize::ALL {
            assert_eq!(PageSize::try_from(size.value()).unwrap(), size);
        }
        assert!(PageSize::try_from(7).is_err());
        assert_eq!(PageSize::default().value(), 10);
    }

    #[test]
    fn should_deduplicate_image_urls() {
        let mut images = ImageUrls::new();
        images.add("https://cdn.example.com/a.png").unwrap();
        images.add(" https://cdn.example.com/a.png ").unwrap();
        images.add("https://cdn.example.com/b.png").unwrap();

        assert_eq!(
            images.as_slice(),
            &[
                "https://cdn.example.com/a.png".to_string(),
                "https://cdn.example.com/b.png".to_string()
            ]
        );
    }

    #[test]
    fn should_reject_invalid_image_url() {
        let mut images = ImageUrls::new();
        let result = images.add("not-a-url");

        assert_eq!(result, Err(ValidationError::InvalidImageUrl));
        assert!(images.is_empty());
    }

    #[test]
    fn should_ignore_blank_image_input_and_remove_urls() {
        let mut images = ImageUrls::new();
        images.add("   ").unwrap();
        assert!(images.is_empty());

        images.add("https://cdn.example.com/a.png").unwrap();
        images.remove("https://cdn.example.com/a.png");
        assert!(images.into_vec().is_empty());
    }
}
