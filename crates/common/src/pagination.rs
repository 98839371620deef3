use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl std::str::FromStr for Order {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err("order must be equal to one of the allowed values"),
        }
    }
}

/// `count` + `cursor` pagination used by most list endpoints.
///
/// `cursor` distinguishes an absent value (`None`, omitted from the query)
/// from an explicit null (`Some(None)`, sent as `cursor=null`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CursorPagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub cursor: Option<Option<String>>,
}

impl CursorPagination {
    pub fn new(count: u32) -> Self {
        Self {
            count: Some(count),
            cursor: None,
        }
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(Some(cursor.into()));
        self
    }

    /// Continue from the `next_cursor` of a previous page. Returns `None` once
    /// the listing is exhausted.
    pub fn next(&self, next_cursor: Option<&str>) -> Option<Self> {
        next_cursor.map(|cursor| Self {
            count: self.count,
            cursor: Some(Some(cursor.to_string())),
        })
    }
}

/// `count` + `page` pagination, used only by the transaction manager history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagePagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}
