fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Site settings are read with option_env!, so a change must rebuild
    for var in [
        "CONTACT_ENDPOINT",
        "CONTACT_SIMULATED_DELAY_MS",
        "CONTACT_SIMULATE_FAILURE",
        "LOG_LEVEL",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
