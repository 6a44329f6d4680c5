//! # Obscura Core
//!
//! Domain logic for the Obscura studio backend: read-only queries over the
//! portfolio catalog and the outbound-mail flow behind the inquiry form.
//!
//! ## Overview
//!
//! - **Catalog Store**: an immutable snapshot of the studio portfolio with
//!   lookup, filter, search, pagination, related-item, statistics, and
//!   validation operations ([`catalog`]).
//! - **Inquiry dispatch**: required-field validation, notification
//!   composition, and delivery through a pluggable SMTP transport
//!   ([`inquiry`], [`mail`]).
//!
//! Both pieces are leaves: the catalog never changes after load and the
//! inquiry flow keeps no state between requests.

pub mod catalog;
pub mod error;
pub mod inquiry;
pub mod mail;

pub use catalog::{
    ALL_CATEGORIES, CatalogStats, CatalogStore, CatalogValidation,
    CategoryStats, DEFAULT_PAGE_LIMIT, Page,
};
pub use error::CatalogError;
pub use inquiry::{InquiryError, dispatch_inquiry};
pub use mail::{
    MailError, MailTransport, OutboundEmail,
    smtp::{SmtpMailer, SmtpSettings},
};
