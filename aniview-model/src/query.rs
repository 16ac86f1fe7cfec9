//! Search criteria and deterministic request construction.
//!
//! A [`SearchRequest`] uniquely identifies one network call: two requests
//! with identical criteria and page are duplicates, which is what the
//! coordinator's at-most-one-in-flight rule compares against. Parameter
//! construction is pure so the same request always serializes to the same
//! parameter list.

use std::fmt;

/// Results per page, fixed by the client rather than user-selectable.
pub const PAGE_SIZE: u32 = 20;

/// The catalog genres the UI offers, with their Jikan numeric ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Romance,
    SciFi,
}

impl Genre {
    pub fn all() -> &'static [Genre] {
        use Genre::*;
        &[
            Action, Adventure, Comedy, Drama, Fantasy, Horror, Romance, SciFi,
        ]
    }

    /// Numeric id the `genres` request parameter expects.
    pub fn api_id(&self) -> u32 {
        match self {
            Genre::Action => 1,
            Genre::Adventure => 2,
            Genre::Comedy => 4,
            Genre::Drama => 8,
            Genre::Fantasy => 10,
            Genre::Horror => 14,
            Genre::Romance => 22,
            Genre::SciFi => 24,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sort key. Field and direction travel as two independent request
/// parameters (`order_by` and `sort`), never conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Score,
    Popularity,
    LastUpdate,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[SortField::Score, SortField::Popularity, SortField::LastUpdate]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            SortField::Score => "score",
            SortField::Popularity => "popularity",
            SortField::LastUpdate => "last_updated",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortField::Score => "Score",
            SortField::Popularity => "Popularity",
            SortField::LastUpdate => "Last updated",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[SortOrder::Descending, SortOrder::Ascending]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortOrder::Ascending => "Low → High",
            SortOrder::Descending => "High → Low",
        };
        write!(f, "{label}")
    }
}

/// The complete set of text/filter/sort inputs, excluding page.
///
/// Structural equality; the coordinator resets the page to 1 whenever any
/// field changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub text: String,
    pub genre: Option<Genre>,
    pub year: Option<u16>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            text: String::new(),
            genre: None,
            year: None,
            sort_field: SortField::Score,
            sort_order: SortOrder::Descending,
        }
    }
}

/// One network call's worth of search input: criteria plus page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub criteria: SearchCriteria,
    pub page: u32,
}

impl SearchRequest {
    pub fn new(criteria: SearchCriteria, page: u32) -> Self {
        Self { criteria, page }
    }

    /// Serialize to the ordered `GET /anime` parameter list.
    ///
    /// `q` is always present: an empty query is a valid request that
    /// returns the default top-ranked listing. Absent optional filters are
    /// omitted entirely rather than sent with empty values, and a year
    /// expands to the inclusive Jan 1 – Dec 31 date range of that year.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let criteria = &self.criteria;
        let mut params = vec![
            ("q", criteria.text.clone()),
            ("page", self.page.to_string()),
            ("limit", PAGE_SIZE.to_string()),
        ];

        if let Some(genre) = criteria.genre {
            params.push(("genres", genre.api_id().to_string()));
        }
        if let Some(year) = criteria.year {
            params.push(("start_date", format!("{year}-01-01")));
            params.push(("end_date", format!("{year}-12-31")));
        }
        params.push(("order_by", criteria.sort_field.api_name().to_string()));
        params.push(("sort", criteria.sort_order.api_name().to_string()));

        params
    }
}
