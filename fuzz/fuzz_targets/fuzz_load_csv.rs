#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if data.len() > 16384 { return; }
    let opts = csaplot::import::ImportOptions::default();
    if let Ok(ds) = csaplot::import::load_from_reader(Cursor::new(data), &opts) {
        // whatever loads must aggregate without panicking
        let v = csaplot::summarize_variance(&ds, csaplot::SingletonVariance::Zero);
        let r = csaplot::summarize_range(&ds, 0.0);
        assert_eq!(v.len(), r.len());
        for s in r.iter().filter(|s| s.mean.is_finite()) {
            assert!(s.min <= s.mean && s.mean <= s.max);
        }
    }
});
