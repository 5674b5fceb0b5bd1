//! The process-wide default config.
//!
//! Everything lives in one test: the default is built once per process.

use std::sync::Arc;
use std::thread;

use placenext_core::Context;
use placenext_rest::{
    default_config, set_default_config, Client, Config, PLACENEXT_ADDRESS, PLACENEXT_APIKEY,
    PLACENEXT_SECRETKEY,
};

const API_KEY: &str = "UOCMBvhRFLwxDhUFdDeK2QpfvV80Og";
const SECRET_KEY: &str = "dMAMNw6HE60xDhV0SWZNsVZSVW91culvEXBFLE76ij62wsZXXqI+aQ";

#[test]
fn test_default_config() {
    let _ = env_logger::builder().is_test(true).try_init();

    temp_env::with_vars(
        [
            (PLACENEXT_APIKEY, Some(API_KEY)),
            (PLACENEXT_SECRETKEY, Some(SECRET_KEY)),
            (PLACENEXT_ADDRESS, Some("http://127.0.0.1:9900")),
        ],
        || {
            let cfg = default_config().expect("default config must be loaded from env");
            assert_eq!(cfg.api_key(), API_KEY);
            assert_eq!(cfg.host(), "http://127.0.0.1:9900");
        },
    );

    let client = Client::with_default_config(Context::new());
    assert_eq!(client.config().unwrap().api_key(), API_KEY);

    let replaced = Config::new_with_context(&Context::new(), "replaced-api-key", SECRET_KEY)
        .unwrap()
        .with_host("http://localhost:8080");
    set_default_config(replaced.clone());

    // Clients over the default see the swap on their next call, fixed ones never do.
    let fixed = Client::new(
        Context::new(),
        Config::new_with_context(&Context::new(), "fixed-api-key", SECRET_KEY).unwrap(),
    );
    assert_eq!(client.config().unwrap().as_ref(), &replaced);
    assert_eq!(fixed.config().unwrap().api_key(), "fixed-api-key");

    // Readers racing a writer see one config in full, never a mix.
    let a = Arc::new(
        Config::new_with_context(&Context::new(), "api-key-a", SECRET_KEY)
            .unwrap()
            .with_host("http://a.example"),
    );
    let b = Arc::new(
        Config::new_with_context(&Context::new(), "api-key-b", SECRET_KEY)
            .unwrap()
            .with_host("http://b.example"),
    );

    let writer = {
        let (a, b) = (a.clone(), b.clone());
        thread::spawn(move || {
            for i in 0..1000 {
                set_default_config(if i % 2 == 0 { a.clone() } else { b.clone() });
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    let cfg = client.config().unwrap();
                    match cfg.api_key() {
                        "api-key-a" => assert_eq!(cfg.host(), "http://a.example"),
                        "api-key-b" => assert_eq!(cfg.host(), "http://b.example"),
                        "replaced-api-key" => assert_eq!(cfg.host(), "http://localhost:8080"),
                        other => panic!("unexpected api key {other}"),
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }

    let cfg = default_config().unwrap();
    assert_eq!(cfg.api_key(), "api-key-b");
}
