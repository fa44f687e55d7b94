//! Generates `package.json` and the fixed `tsconfig.json`.

use serde::Serialize;

use crate::model::ServerMetadata;

/// npm package manifest for the generated server. Serialized as a struct
/// so field order is fixed and output stays byte-stable across runs.
#[derive(Serialize)]
struct PackageManifest<'a> {
    name: &'a str,
    version: &'a str,
    #[serde(rename = "type")]
    module_type: &'static str,
    scripts: Scripts,
    dependencies: Dependencies,
    #[serde(rename = "devDependencies")]
    dev_dependencies: DevDependencies,
}

#[derive(Serialize)]
struct Scripts {
    build: &'static str,
    start: &'static str,
    dev: &'static str,
}

#[derive(Serialize)]
struct Dependencies {
    #[serde(rename = "@modelcontextprotocol/sdk")]
    mcp_sdk: &'static str,
}

#[derive(Serialize)]
struct DevDependencies {
    typescript: &'static str,
    tsx: &'static str,
}

/// Generate the contents of `package.json`.
pub fn package_json(server: &ServerMetadata) -> String {
    let manifest = PackageManifest {
        name: &server.name,
        version: &server.version,
        module_type: "module",
        scripts: Scripts {
            build: "tsc",
            start: "node dist/index.js",
            dev: "tsx watch src/index.ts",
        },
        dependencies: Dependencies {
            mcp_sdk: "^1.0.0",
        },
        dev_dependencies: DevDependencies {
            typescript: "^5.0.0",
            tsx: "^4.0.0",
        },
    };

    let mut out = serde_json::to_string_pretty(&manifest).unwrap();
    out.push('\n');
    out
}

/// Fixed compiler configuration. Identical for every specification; it
/// reads nothing from the model.
pub const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "Node16",
    "moduleResolution": "Node16",
    "outDir": "dist",
    "rootDir": "src",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "declaration": true,
    "sourceMap": true
  },
  "include": ["src/**/*"]
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_carries_server_metadata() {
        let server = ServerMetadata {
            name: "echo-server".to_string(),
            version: "0.2.0".to_string(),
            transport: "stdio".to_string(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&package_json(&server)).expect("valid JSON");
        assert_eq!(json["name"], "echo-server");
        assert_eq!(json["version"], "0.2.0");
        assert_eq!(json["type"], "module");
        assert_eq!(json["scripts"]["build"], "tsc");
        assert!(json["dependencies"]["@modelcontextprotocol/sdk"].is_string());
        assert!(json["devDependencies"]["typescript"].is_string());
    }

    #[test]
    fn manifest_defaults_without_explicit_metadata() {
        let json: serde_json::Value =
            serde_json::from_str(&package_json(&ServerMetadata::default())).expect("valid JSON");
        assert_eq!(json["name"], "generated-mcp-server");
        assert_eq!(json["version"], "0.1.0");
    }

    #[test]
    fn manifest_escapes_awkward_names() {
        let server = ServerMetadata {
            name: "has \\ backslash".to_string(),
            ..ServerMetadata::default()
        };
        let out = package_json(&server);
        let json: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(json["name"], "has \\ backslash");
    }

    #[test]
    fn tsconfig_is_valid_json_and_strict() {
        let json: serde_json::Value = serde_json::from_str(TSCONFIG).expect("valid JSON");
        assert_eq!(json["compilerOptions"]["strict"], true);
        assert_eq!(json["compilerOptions"]["rootDir"], "src");
        assert_eq!(json["compilerOptions"]["outDir"], "dist");
    }
}
