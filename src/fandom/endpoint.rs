//! Request URL construction for the wiki list API.

/// Default list endpoint. The first `%d` is the page size, the second the batch.
pub const DEFAULT_URL_TEMPLATE: &str =
    "http://www.wikia.com/api/v1/Wikis/List?expand=1&limit=%d&batch=%d";

/// Number of wikis requested per batch unless configured otherwise.
pub const DEFAULT_PER_PAGE: u32 = 25;

const PLACEHOLDER: &str = "%d";

/// Where and how many wikis to request per batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url_template: String,
    pub per_page: u32,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Endpoint {
    pub fn new(url_template: impl Into<String>, per_page: u32) -> Self {
        Self {
            url_template: url_template.into(),
            per_page,
        }
    }

    /// URL for the given batch (1-based).
    ///
    /// Placeholders are filled in order: page size, then batch. Extra
    /// placeholders are left untouched.
    pub fn url_for(&self, batch: u32) -> String {
        let mut url = self.url_template.clone();
        for value in [self.per_page, batch] {
            if let Some(pos) = url.find(PLACEHOLDER) {
                url.replace_range(pos..pos + PLACEHOLDER.len(), &value.to_string());
            }
        }
        url
    }

    /// Number of `%d` placeholders in the template.
    pub fn placeholder_count(&self) -> usize {
        self.url_template.matches(PLACEHOLDER).count()
    }
}
