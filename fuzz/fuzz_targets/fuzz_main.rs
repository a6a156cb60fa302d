// SPDX-License-Identifier: AGPL-3.0-or-later
#![no_main]

use libfuzzer_sys::fuzz_target;
use roadmap_core::decode::decode_document;
use roadmap_core::{parse_roadmap, render_diagram, render_tree, validate};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = decode_document(text) else {
        return;
    };

    // validate and parse_roadmap must agree, and renderers must be total
    match (validate(&document), parse_roadmap(&document)) {
        (Ok(()), Ok(roadmap)) => {
            let _ = render_tree(&roadmap);
            let _ = render_diagram(&roadmap);
        }
        (Err(a), Err(b)) => assert_eq!(a, b),
        (a, b) => panic!("validate and parse_roadmap disagree: {a:?} vs {:?}", b.map(|_| ())),
    }
});
