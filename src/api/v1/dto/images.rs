use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateImageRequest {
    pub title: String,
    pub url: String,
}
