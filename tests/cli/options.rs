use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

const VIEW: &str = "export default {\n  render() {\n    return <div />\n  },\n}\n";

#[test]
fn test_tsx_files_parse_jsx() -> Result<()> {
    let test = CliTest::with_file("view.tsx", VIEW)?;

    let mut cmd = test.json_command();
    cmd.arg("view.tsx");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let value: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(value[0]["result"]["methods"][0]["name"], "render");
    Ok(())
}

#[test]
fn test_tsx_flag_enables_jsx_for_js_files() -> Result<()> {
    let test = CliTest::with_file("view.js", VIEW)?;

    let mut cmd = test.json_command();
    cmd.arg("view.js");
    assert_eq!(run(cmd)?.code, Some(1));

    let mut cmd = test.json_command();
    cmd.args(["--tsx", "view.js"]);
    assert_eq!(run(cmd)?.code, Some(0));
    Ok(())
}

#[test]
fn test_no_decorators_rejects_decorated_classes() -> Result<()> {
    let test = CliTest::with_file(
        "controller.ts",
        "@inject()\nexport default class {\n  index() {}\n}\n",
    )?;

    let mut cmd = test.json_command();
    cmd.arg("controller.ts");
    assert_eq!(run(cmd)?.code, Some(0));

    let mut cmd = test.json_command();
    cmd.args(["--no-decorators", "controller.ts"]);
    assert_eq!(run(cmd)?.code, Some(1));
    Ok(())
}

#[test]
fn test_ignore_patterns() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "export default { a() {} }\n")?;
    test.write_file("src/types.d.ts", "export default interface Shape {}\n")?;

    let mut cmd = test.json_command();
    cmd.args(["src", "--ignore", "**/*.d.ts"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let value: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["file"], "src/index.ts");
    Ok(())
}

#[test]
fn test_invalid_ignore_pattern() -> Result<()> {
    let test = CliTest::with_file("index.ts", "export default {}\n")?;

    let mut cmd = test.command();
    cmd.args(["index.ts", "--ignore", "["]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid glob pattern in '--ignore'"));
    Ok(())
}

#[test]
fn test_format_from_environment() -> Result<()> {
    let test = CliTest::with_file("index.ts", "export default {}\n")?;

    let mut cmd = test.command();
    cmd.env("DEFAULT_METHODS_FORMAT", "json");
    cmd.arg("index.ts");
    let output = run(cmd)?;

    let value: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(value[0]["result"]["kind"], "object");
    Ok(())
}
