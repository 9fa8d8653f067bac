#[derive(Debug)]
pub struct IdDTO {
    pub id: String,
}
