#[derive(Clone, Debug, Default)]
pub struct ListWorkSystemsQuery;

impl ListWorkSystemsQuery {
    pub fn new() -> Self {
        Self
    }
}
