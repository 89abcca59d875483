use keypath::{resolver, Value};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ServerSection {
    host: String,
    port: u16,
}

const CONFIG: &str = r#"
[server]
host = "localhost"
port = 8080

[server.limits]
max_connections = 64
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse once, then address everything by path
    let table: toml::Table = toml::from_str(CONFIG)?;
    let mut config = Value::from(table);

    let resolver = resolver();

    println!("host: {:?}", resolver.get(&config, "server.host"));
    println!(
        "max connections: {:?}",
        resolver.get(&config, "server.limits.max_connections")
    );

    // Writes construct the containers they are missing
    resolver.set(&mut config, "server.limits.max_requests", 1024)?;
    resolver.set(&mut config, "telemetry.sink.path", "/var/log/app")?;
    println!("telemetry: {:?}", resolver.get(&config, "telemetry.sink.path"));

    // Lift a subtree back out into a typed struct
    let server = resolver
        .get(&config, "server")
        .cloned()
        .ok_or("missing server section")?;
    let server: ServerSection = toml::Value::from(server).try_into()?;
    println!("server: {} on port {}", server.host, server.port);

    Ok(())
}
