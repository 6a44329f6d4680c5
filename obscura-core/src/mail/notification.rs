//! Composition of the inquiry notification the studio receives.

use chrono::NaiveDate;
use obscura_model::InquiryRequest;

use super::OutboundEmail;

/// Build the notification email for a validated inquiry.
///
/// The event type is title-cased and the event date rendered long-form
/// ("Saturday, June 20, 2026"); booking-only fields (time, location,
/// package) appear only when the form supplied them.
pub fn inquiry_notification(
    inquiry: &InquiryRequest,
    studio_name: &str,
) -> OutboundEmail {
    let subject =
        format!("New Contact Form Submission from {}", inquiry.name);

    let phone = inquiry
        .phone
        .as_deref()
        .filter(|phone| !phone.trim().is_empty())
        .unwrap_or("Not provided");

    let mut event_rows = vec![
        detail_row("Type", &title_case(&inquiry.event_type)),
        detail_row("Date", &long_form_date(&inquiry.date)),
    ];
    if let Some(time) = non_blank(inquiry.time.as_deref()) {
        event_rows.push(detail_row("Time", time));
    }
    if let Some(location) = non_blank(inquiry.location.as_deref()) {
        event_rows.push(detail_row("Location", location));
    }
    if let Some(package) = non_blank(inquiry.package.as_deref()) {
        event_rows.push(detail_row("Package", &title_case(package)));
    }
    let event_rows = event_rows.join("\n");

    let html_body = format!(
        r#"<div style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto; padding: 24px;">
  <h2 style="color: #2b2b2b; text-align: center;">New Photography Inquiry</h2>

  <div style="background-color: #f7f5f0; padding: 18px; border-radius: 6px; margin-bottom: 16px;">
    <h3 style="color: #8a6d3b; margin-top: 0;">Client Details</h3>
{name_row}
{email_row}
{phone_row}
  </div>

  <div style="background-color: #f7f5f0; padding: 18px; border-radius: 6px; margin-bottom: 16px;">
    <h3 style="color: #8a6d3b; margin-top: 0;">Event Information</h3>
{event_rows}
  </div>

  <div style="background-color: #f7f5f0; padding: 18px; border-radius: 6px;">
    <h3 style="color: #8a6d3b; margin-top: 0;">Message</h3>
    <p style="line-height: 1.7; color: #444;">{message}</p>
  </div>

  <div style="font-size: 12px; color: #999; text-align: center; margin-top: 24px;">
    <p style="margin: 4px 0;">{studio_name}</p>
    <p style="margin: 4px 0;">This is an automated email from the website's contact form</p>
  </div>
</div>"#,
        name_row = detail_row("Name", &inquiry.name),
        email_row = detail_row("Email", &inquiry.email),
        phone_row = detail_row("Phone", phone),
        event_rows = event_rows,
        message = inquiry.message,
        studio_name = studio_name,
    );

    OutboundEmail { subject, html_body }
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"    <p style="margin: 6px 0;"><span style="color: #666; font-weight: bold;">{label}:</span> {value}</p>"#
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// Uppercase the first character, leaving the rest untouched.
fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render an ISO date long-form; fall back to the raw string when the form
/// sent something unparseable.
fn long_form_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(|date| date.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
