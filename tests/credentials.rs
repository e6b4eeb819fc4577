//! Token lookup reads process-wide environment variables, so everything that
//! touches them lives in this one test binary and runs in one test.

use std::{env, fs, path::PathBuf};

use autotrain::client::credentials::{get_user_token, token_paths};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("autotrain_token_lookup_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn token_lookup_order() {
    let hf_home = scratch_dir("hf_home");
    let xdg_cache = scratch_dir("xdg_cache");

    // HF_HOME wins over XDG_CACHE_HOME.
    env::set_var("HF_HOME", &hf_home);
    env::set_var("XDG_CACHE_HOME", &xdg_cache);
    assert_eq!(token_paths()[0], hf_home.join("token"));

    // Without HF_HOME the hub directory sits under the XDG cache.
    env::remove_var("HF_HOME");
    assert_eq!(
        token_paths()[0],
        xdg_cache.join("huggingface").join("token")
    );

    // The env token takes priority over a cached file.
    env::set_var("HF_HOME", &hf_home);
    fs::write(hf_home.join("token"), "hf_from_file\n").unwrap();
    env::set_var("HF_TOKEN", "hf_from_env");
    assert_eq!(get_user_token().unwrap().as_deref(), Some("hf_from_env"));

    // A blank env token falls through to the file.
    env::set_var("HF_TOKEN", "   ");
    assert_eq!(get_user_token().unwrap().as_deref(), Some("hf_from_file"));

    env::remove_var("HF_TOKEN");
    assert_eq!(get_user_token().unwrap().as_deref(), Some("hf_from_file"));
}
