use chainconf_config::{EnvSnapshot, Manifest, ProjectConfig};
use serde_json::Value;

fn render(env: &EnvSnapshot) -> Value {
    let project = ProjectConfig::resolve(env, &Manifest::default());
    let json = project.framework().to_json_pretty().unwrap();
    serde_json::from_str(&json).unwrap()
}

/// Remote networks carry `url` and `accounts`, the local one its base fee
#[test]
fn test_network_entries() {
    let env = EnvSnapshot::from_pairs([
        ("MAINNET_URL", "https://rpc.example"),
        ("PRIVATE_KEY", "0xabc"),
    ]);
    let config = render(&env);
    let networks = config["networks"].as_object().unwrap();

    assert_eq!(networks.len(), 6);
    assert_eq!(networks["hardhat"]["initialBaseFeePerGas"], 0);
    assert_eq!(networks["mainnet"]["url"], "https://rpc.example");
    assert_eq!(networks["mainnet"]["accounts"], serde_json::json!(["0xabc"]));
    assert_eq!(networks["ropsten"]["url"], "");
}

#[test]
fn test_unconfigured_networks_have_no_accounts() {
    let config = render(&EnvSnapshot::default());
    // Unset API keys are omitted rather than rendered as null
    assert!(config["gasReporter"].get("coinmarketcap").is_none());
    assert!(config["etherscan"].get("apiKey").is_none());

    for name in ["ropsten", "rinkeby", "polygon", "polygonMumbai", "mainnet"] {
        assert_eq!(config["networks"][name]["url"], "", "network {}", name);
        assert_eq!(config["networks"][name]["accounts"], serde_json::json!([]));
    }
}

#[test]
fn test_compiler_section() {
    let config = render(&EnvSnapshot::default());
    let solidity = &config["solidity"];

    assert_eq!(solidity["version"], "0.8.4");
    assert_eq!(solidity["settings"]["optimizer"]["enabled"], true);
    assert_eq!(solidity["settings"]["optimizer"]["runs"], 200);
    assert_eq!(
        solidity["settings"]["outputSelection"]["*"]["*"],
        serde_json::json!(["storageLayout"])
    );
}

#[test]
fn test_plugin_sections() {
    let env = EnvSnapshot::from_pairs([("ETHERSCAN_API_KEY", "explorer-key")]);
    let config = render(&env);

    assert_eq!(config["gasReporter"]["enabled"], false);
    assert_eq!(config["gasReporter"]["currency"], "USD");
    assert_eq!(config["gasReporter"]["gasPrice"], 200);
    assert_eq!(config["gasReporter"]["showTimeSpent"], true);
    assert!(config["gasReporter"].get("coinmarketcap").is_none());
    assert_eq!(config["etherscan"]["apiKey"], "explorer-key");

    assert_eq!(config["contractSizer"]["alphaSort"], true);
    assert_eq!(config["contractSizer"]["runOnCompile"], true);
    assert_eq!(config["contractSizer"]["disambiguatePaths"], false);

    let exporter = config["abiExporter"].as_array().unwrap();
    assert_eq!(exporter.len(), 2);
    assert_eq!(exporter[0]["path"], "./abi/");
    assert_eq!(exporter[0]["spacing"], 2);
    assert!(exporter[1].get("spacing").is_none());
    assert_eq!(exporter[1]["pretty"], false);
}

#[test]
fn test_toml_rendering() {
    let env = EnvSnapshot::from_pairs([("POLYGON_URL", "https://polygon.example")]);
    let project = ProjectConfig::resolve(&env, &Manifest::default());
    let rendered = project.framework().to_toml().unwrap();

    let parsed: toml::Value = toml::from_str(&rendered).unwrap();
    assert_eq!(
        parsed["networks"]["polygon"]["url"].as_str(),
        Some("https://polygon.example")
    );
    assert_eq!(parsed["solidity"]["version"].as_str(), Some("0.8.4"));
}
