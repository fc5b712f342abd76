//! List query parameters and the sortable-field lookup.

use chrono::NaiveDate;
use dataset::Invoice;

/// Default page size when the caller does not specify a limit.
pub const DEFAULT_LIMIT: usize = 20;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `"desc"` selects descending; anything else is ascending.
    pub fn from_param(order: &str) -> Self {
        if order == "desc" { Self::Desc } else { Self::Asc }
    }
}

/// The enumerated set of sortable invoice fields.
///
/// Unknown field names resolve to the default (`invoice_date`) instead of
/// erroring; callers sorting by a typo silently get date order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    FirstName,
    LastName,
    Name,
    Email,
    CustomerId,
    ProductId,
    Qty,
    Amount,
    #[default]
    InvoiceDate,
    DueDate,
    InvoiceNumber,
    Status,
    Address,
    City,
    Country,
    StockCode,
    Job,
}

impl SortField {
    /// Resolves a field name, falling back to the default for unknown
    /// names.
    pub fn resolve(name: &str) -> Self {
        match name {
            "first_name" => Self::FirstName,
            "last_name" => Self::LastName,
            "name" => Self::Name,
            "email" => Self::Email,
            "customer_id" => Self::CustomerId,
            "product_id" => Self::ProductId,
            "qty" => Self::Qty,
            "amount" => Self::Amount,
            "invoice_date" => Self::InvoiceDate,
            "due_date" => Self::DueDate,
            "invoice_number" => Self::InvoiceNumber,
            "status" => Self::Status,
            "address" => Self::Address,
            "city" => Self::City,
            "country" => Self::Country,
            "stock_code" => Self::StockCode,
            "job" => Self::Job,
            _ => Self::default(),
        }
    }

    /// Extracts the comparison key for `invoice`.
    pub(crate) fn key<'a>(self, invoice: &'a Invoice) -> SortKey<'a> {
        match self {
            Self::FirstName => SortKey::Text(&invoice.first_name),
            Self::LastName => SortKey::Text(&invoice.last_name),
            Self::Name => SortKey::Text(&invoice.name),
            Self::Email => SortKey::Text(&invoice.email),
            Self::CustomerId => SortKey::Text(invoice.customer_id.as_str()),
            Self::ProductId => SortKey::Text(invoice.product_id.as_str()),
            Self::Qty => SortKey::Quantity(invoice.qty),
            Self::Amount => SortKey::Cents(invoice.amount.cents()),
            Self::InvoiceDate => SortKey::Date(invoice.invoice_date),
            Self::DueDate => SortKey::Date(invoice.due_date),
            Self::InvoiceNumber => SortKey::Text(invoice.invoice_number.as_str()),
            Self::Status => SortKey::Text(invoice.status.as_str()),
            Self::Address => SortKey::Text(&invoice.address),
            Self::City => SortKey::Text(&invoice.city),
            Self::Country => SortKey::Text(&invoice.country),
            Self::StockCode => SortKey::Text(&invoice.stock_code),
            Self::Job => SortKey::Text(&invoice.job),
        }
    }
}

/// Typed comparison key. Each field maps to exactly one variant, so keys
/// within a single sort never compare across variants.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SortKey<'a> {
    Text(&'a str),
    Quantity(u32),
    Cents(i64),
    Date(NaiveDate),
}

/// Parameters for the filtered, sorted, paginated invoice listing.
///
/// `status` and `city` are equality filters, AND-combined when both are
/// present. Values matching no row produce an empty listing, not an
/// error.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub status: Option<String>,
    pub city: Option<String>,
    pub sort_by: SortField,
    pub order: SortOrder,
    pub limit: usize,
    pub offset: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            status: None,
            city: None,
            sort_by: SortField::default(),
            order: SortOrder::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
