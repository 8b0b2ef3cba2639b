#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Account record returned by the auth endpoints and cached alongside the
/// token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Credentials for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

/// Registration payload for `POST /auth/signup`. The confirm-password
/// field is validated client-side and never sent.
#[derive(Clone, Debug, Serialize)]
pub struct SignupPayload {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// Response shape shared by login and signup.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// =============================================================================
// PAGINATION & SORTING
// =============================================================================

/// Paginated list envelope returned by the list endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Sort direction for list queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// Catalog product as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub attributes: Vec<ProductAttribute>,
    pub created_at: String,
    pub updated_at: String,
}

/// Name/value pair attached to a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// Attribute row in a create/update payload; the backend assigns ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductAttributeInput {
    pub name: String,
    pub value: String,
}

/// Body of `POST /products`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub attributes: Vec<ProductAttributeInput>,
}

/// Body of `PUT /products/{id}`. The forms always submit every field, so
/// this is the create payload plus the id.
#[derive(Clone, Debug, Serialize)]
pub struct UpdateProductPayload {
    pub id: String,
    #[serde(flatten)]
    pub fields: CreateProductPayload,
}

/// Sortable product columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductSortField {
    Name,
    Price,
    Stock,
    #[default]
    CreatedAt,
}

impl ProductSortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::CreatedAt => "createdAt",
        }
    }
}

/// Query parameters for `GET /products`. Unset fields are omitted from
/// the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFilters {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<ProductSortField>,
    pub sort_order: Option<SortOrder>,
}

impl ProductFilters {
    /// Filters the product list opens with: newest first, first page.
    pub fn initial() -> Self {
        Self {
            search: None,
            page: Some(1),
            limit: Some(10),
            sort_by: Some(ProductSortField::CreatedAt),
            sort_order: Some(SortOrder::Desc),
        }
    }

    /// Query parameters in wire form. Empty search is treated as unset.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_common(
            &mut query,
            self.search.as_deref(),
            self.page,
            self.limit,
            self.sort_by.map(ProductSortField::as_str),
            self.sort_order,
        );
        query
    }

    /// Sort by `field`, flipping to descending when it was already the
    /// ascending sort column.
    pub fn toggle_sort(&mut self, field: ProductSortField) {
        let ascending =
            self.sort_by == Some(field) && self.sort_order == Some(SortOrder::Asc);
        self.sort_by = Some(field);
        self.sort_order = Some(if ascending {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        });
    }

    /// Update the search text and reset to the first page.
    pub fn set_search(&mut self, text: String) {
        self.search = if text.is_empty() { None } else { Some(text) };
        self.page = Some(1);
    }
}

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// The value domain of an attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    #[default]
    Text,
    Number,
    Select,
    Boolean,
}

impl AttributeType {
    pub const ALL: [Self; 4] = [Self::Text, Self::Number, Self::Select, Self::Boolean];

    /// Wire name, as used in payloads and the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Select => "select",
            Self::Boolean => "boolean",
        }
    }

    /// Display label for select options and table chips.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::Select => "Select",
            Self::Boolean => "Boolean",
        }
    }

    /// Parse a wire name back into a type; used by the form select.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Reusable attribute definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub values: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `POST /attributes`.
#[derive(Clone, Debug, Serialize)]
pub struct CreateAttributePayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub values: Vec<String>,
}

/// Body of `PUT /attributes/{id}`; see [`UpdateProductPayload`].
#[derive(Clone, Debug, Serialize)]
pub struct UpdateAttributePayload {
    pub id: String,
    #[serde(flatten)]
    pub fields: CreateAttributePayload,
}

/// Sortable attribute columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttributeSortField {
    Name,
    Type,
    #[default]
    CreatedAt,
}

impl AttributeSortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::CreatedAt => "createdAt",
        }
    }
}

/// Query parameters for `GET /attributes`; adds a type filter on top of
/// the common list parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeFilters {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub kind: Option<AttributeType>,
    pub sort_by: Option<AttributeSortField>,
    pub sort_order: Option<SortOrder>,
}

impl AttributeFilters {
    /// Filters the attribute list opens with: newest first, first page.
    pub fn initial() -> Self {
        Self {
            search: None,
            page: Some(1),
            limit: Some(10),
            kind: None,
            sort_by: Some(AttributeSortField::CreatedAt),
            sort_order: Some(SortOrder::Desc),
        }
    }

    /// Query parameters in wire form. Empty search is treated as unset.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(kind) = self.kind {
            query.push(("type", kind.as_str().to_owned()));
        }
        push_common(
            &mut query,
            self.search.as_deref(),
            self.page,
            self.limit,
            self.sort_by.map(AttributeSortField::as_str),
            self.sort_order,
        );
        query
    }

    /// Sort by `field`, flipping to descending when it was already the
    /// ascending sort column.
    pub fn toggle_sort(&mut self, field: AttributeSortField) {
        let ascending =
            self.sort_by == Some(field) && self.sort_order == Some(SortOrder::Asc);
        self.sort_by = Some(field);
        self.sort_order = Some(if ascending {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        });
    }

    /// Update the search text and reset to the first page.
    pub fn set_search(&mut self, text: String) {
        self.search = if text.is_empty() { None } else { Some(text) };
        self.page = Some(1);
    }

    /// Update the type filter and reset to the first page.
    pub fn set_kind(&mut self, kind: Option<AttributeType>) {
        self.kind = kind;
        self.page = Some(1);
    }
}

/// Append the list parameters shared by every resource.
fn push_common(
    query: &mut Vec<(&'static str, String)>,
    search: Option<&str>,
    page: Option<u32>,
    limit: Option<u32>,
    sort_by: Option<&'static str>,
    sort_order: Option<SortOrder>,
) {
    if let Some(search) = search {
        if !search.is_empty() {
            query.push(("search", search.to_owned()));
        }
    }
    if let Some(page) = page {
        query.push(("page", page.to_string()));
    }
    if let Some(limit) = limit {
        query.push(("limit", limit.to_string()));
    }
    if let Some(sort_by) = sort_by {
        query.push(("sortBy", sort_by.to_owned()));
    }
    if let Some(sort_order) = sort_order {
        query.push(("sortOrder", sort_order.as_str().to_owned()));
    }
}
