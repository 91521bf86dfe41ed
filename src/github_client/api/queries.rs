use serde::Serialize;

/// Query for `GET /issues`, which spans every repository visible to the user.
#[derive(Serialize)]
pub struct IssueListQuery<'a> {
    pub filter: &'a str,
    pub state: &'a str,
    pub per_page: u32,
}
