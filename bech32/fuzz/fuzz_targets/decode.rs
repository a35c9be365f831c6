// SPDX-FileCopyrightText: © 2023 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_main]

use bech32::{primitives::decode::CheckedHrpstring, Bech32};
use foundation_bech32::MAX_LEN;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = core::str::from_utf8(data) {
        let Ok((hrp, data)) = foundation_bech32::decode(s) else {
            return;
        };
        assert!(s.len() <= MAX_LEN);
        assert!(data.iter().all(|&w| w < 32));

        // Anything accepted here must be accepted by the reference crate.
        let reference = CheckedHrpstring::new::<Bech32>(s).unwrap();
        assert_eq!(reference.hrp().to_lowercase(), hrp);
    }
});
