use std::fmt::Write;

use crate::models::ExpiringLicense;

/// Issue title carrying the number of matching licenses.
pub fn issue_title(expiring: &[ExpiringLicense]) -> String {
    format!(
        "License Expiration Alert - {} license(s) expiring soon",
        expiring.len()
    )
}

/// Markdown issue body: header, count sentence, one subsection per license,
/// then a fixed action checklist and attribution footer.
pub fn issue_body(expiring: &[ExpiringLicense], days: i64) -> String {
    let mut body = String::new();

    body.push_str("## 🚨 License Expiration Alert\n\n");
    let _ = writeln!(
        body,
        "The following {} license(s) are expiring within the next {} days:\n",
        expiring.len(),
        days
    );

    for entry in expiring {
        let license = &entry.license;
        let _ = writeln!(body, "### {}", license.product_name);
        let _ = writeln!(body, "- **Vendor:** {}", license.vendor);
        let _ = writeln!(body, "- **Department:** {}", license.department_or_placeholder());
        let _ = writeln!(body, "- **Expiry Date:** {}", license.expiry_date);
        let _ = writeln!(body, "- **Days Until Expiry:** {}", entry.days_until_expiry);
        let _ = writeln!(body, "- **Notes:** {}\n", license.notes_or_placeholder());
    }

    body.push_str("## Action Required\n");
    body.push_str("Please review these licenses and take appropriate action:\n");
    body.push_str("1. Contact the vendor for renewal\n");
    body.push_str("2. Update the license information in the repository\n");
    body.push_str("3. Notify the relevant departments\n\n");
    body.push_str("---\n");
    body.push_str("*This issue was automatically created by the License Tracker system.*");

    body
}
