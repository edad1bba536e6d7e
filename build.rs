use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";

// String keys the bundled [paths] table must carry.
const PATH_KEYS: [&str; 4] = ["content", "static_dir", "output", "template"];

fn main() {
    println!("cargo:rerun-if-changed={}", CONFIG_PATH);

    let content = fs::read_to_string(CONFIG_PATH).expect("Failed to read default_config.toml");
    let config = match content.parse::<toml::Table>() {
        Ok(config) => config,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    let paths = table(&config, "paths");
    for key in PATH_KEYS {
        if !paths.get(key).is_some_and(toml::Value::is_str) {
            panic!("default_config.toml: [paths].{} must be a string", key);
        }
    }

    let title = table(&config, "title");
    if !title.get("title_case").is_some_and(toml::Value::is_bool) {
        panic!("default_config.toml: [title].title_case must be a boolean");
    }
}

fn table<'a>(config: &'a toml::Table, name: &str) -> &'a toml::Table {
    match config.get(name).and_then(toml::Value::as_table) {
        Some(table) => table,
        None => panic!("default_config.toml: missing [{}] table", name),
    }
}
