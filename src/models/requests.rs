use serde::{Deserialize, Serialize};

use crate::store::Page;

/// Query string for listing endpoints: `?skip=10&limit=5`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

/// Query string for `GET /users`, with an optional exact-match first name filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserListParams {
    pub first_name: Option<String>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

/// Filter and paging for `UserService::get_all_users`.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub first_name: Option<String>,
    pub page: Page,
}

impl From<ListParams> for Page {
    fn from(params: ListParams) -> Self {
        Page {
            skip: params.skip,
            limit: params.limit,
        }
    }
}

impl From<UserListParams> for UserQuery {
    fn from(params: UserListParams) -> Self {
        UserQuery {
            first_name: params.first_name,
            page: Page {
                skip: params.skip,
                limit: params.limit,
            },
        }
    }
}
