use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct UserFilterQuery {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostFilterQuery {
    pub title: Option<String>,
}

/// An empty filter means "no filter".
pub fn non_empty(filter: Option<&str>) -> Option<&str> {
    filter.filter(|value| !value.is_empty())
}
