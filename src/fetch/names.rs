// src/fetch/names.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Month path segments used on the remote server, in publication order.
/// The sweep makes exactly one attempt per directory × month pair.
pub static MONTHS: &[&str] = &[
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Remote filename used for every month without an entry in
/// `REMOTE_NAME_EXCEPTIONS`.
pub static DEFAULT_REMOTE_NAME: &str = "C%20-%20Remuneracion%20mensual%20por%20puesto.pdf";

/// Known deviations from the default remote filename, keyed by the local
/// filename we produce for that month. Uploads on the source site are done
/// by hand and the name drifts: dropped dash, the accent in two different
/// broken encodings, and one month with a transposed "menusal" typo. Keep
/// these byte-for-byte as observed on the server.
static REMOTE_NAME_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "2021_enero.pdf",
            "C%20Remuneracion%20mensual%20por%20puesto.pdf",
        ),
        (
            "2021_febrero.pdf",
            "C%20Remuneracion%20mensual%20por%20puesto.pdf",
        ),
        (
            "2021_junio.pdf",
            "C%20-%20Remuneraci%c3%b3n%20mensual%20por%20puesto.pdf",
        ),
        (
            "2021_julio.pdf",
            "C%20-%20Remuneraci贸n%20mensual%20por%20puesto.pdf",
        ),
        (
            "2021_octubre.pdf",
            "C%20-%20Remuneraci贸n%20menusal%20por%20puesto.pdf",
        ),
        (
            "2021_diciembre.pdf",
            "C%20-%20Remuneraci贸n%20mensual%20por%20puesto.pdf",
        ),
        (
            "2022_enero.pdf",
            "C%20-%20Remuneraci贸n%20mensual%20por%20puesto.pdf",
        ),
    ])
});

/// Resolve the remote filename for a local target filename: exact-match
/// lookup in the exception table, default on any miss.
pub fn remote_filename(local_name: &str) -> &'static str {
    REMOTE_NAME_EXCEPTIONS
        .get(local_name)
        .copied()
        .unwrap_or(DEFAULT_REMOTE_NAME)
}
