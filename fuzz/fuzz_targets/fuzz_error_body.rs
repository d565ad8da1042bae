// SPDX-License-Identifier: PMPL-1.0-or-later
// Fuzz target for backend error-body parsing and normalization

#![no_main]

use composio_errors::{catalog, normalize, ErrorBody, Failure};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let status = u16::from_be_bytes([data[0], data[1]]);
    let body = ErrorBody::parse(&data[2..]);
    let _ = body.detail();

    let err = normalize(Failure::Status {
        status,
        url: "https://fuzz.test/api/v1/apps".to_string(),
        body,
    });

    // Whatever the input, the base catalog text survives.
    let entry = catalog::lookup(err.code());
    assert!(err.message().contains(entry.message));
    assert!(err.description().contains(entry.description));
});
