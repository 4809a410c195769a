//! Fixture bills seeded into the mock store

use crate::core::{Bill, BillStatus};

const PREVIEW_URL: &str = "https://test.storage.tld/v0/b/billable-677b6.appspot.com/o/justificatifs%2Fpreview-facture-free-201801-pdf-1.jpg?alt=media&token=c1640e12-a24b-4b11-ae52-529112e9602a";

#[allow(clippy::too_many_arguments)]
fn bill(
    id: &str,
    expense_type: &str,
    name: &str,
    amount: f64,
    date: &str,
    vat: &str,
    commentary: &str,
    file_name: &str,
    comment_admin: &str,
    status: BillStatus,
) -> Bill {
    Bill {
        id: id.to_string(),
        email: Some("a@a".to_string()),
        expense_type: expense_type.to_string(),
        name: name.to_string(),
        amount,
        date: date.to_string(),
        vat: vat.to_string(),
        pct: 20,
        commentary: commentary.to_string(),
        file_url: Some(PREVIEW_URL.to_string()),
        file_name: Some(file_name.to_string()),
        comment_admin: Some(comment_admin.to_string()),
        status,
    }
}

/// The four bills every test page starts with, in backend order
pub fn bills() -> Vec<Bill> {
    vec![
        bill(
            "47qAXb6fIm2zOKkLzMro",
            "Hôtel et logement",
            "encore",
            400.0,
            "2004-04-04",
            "80",
            "séminaire billed",
            "preview-facture-free-201801-pdf-1.jpg",
            "ok",
            BillStatus::Pending,
        ),
        bill(
            "BeKy5Mo4jkmdfPGYpTxZ",
            "Transports",
            "test1",
            100.0,
            "2001-01-01",
            "",
            "plop",
            "1592770761.jpeg",
            "en fait non",
            BillStatus::Refused,
        ),
        bill(
            "UIUZtnPQvnbFnB0ozvJh",
            "Services en ligne",
            "test3",
            300.0,
            "2003-03-03",
            "60",
            "",
            "facture-client-php-exemple-1.jpg",
            "bon bah d'accord",
            BillStatus::Accepted,
        ),
        bill(
            "qcCK3SzECmaZAGRrHjaC",
            "Restaurants et bars",
            "test2",
            200.0,
            "2002-02-02",
            "40",
            "test2",
            "preview-facture-free-201801-pdf-1.jpg",
            "pas la bonne facture",
            BillStatus::Refused,
        ),
    ]
}
