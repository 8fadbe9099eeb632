use anyhow::Result;
use insta::{assert_json_snapshot, assert_snapshot};
use serde_json::Value;

use crate::{CliTest, run};

const CONTROLLER: &str = r#"import { inject } from '@adonisjs/core'

@inject()
export default class UsersController {
  async index() {}

  async store() {}

  private authorize() {}
}
"#;

#[test]
fn test_human_output() -> Result<()> {
    let test = CliTest::with_file("app/users_controller.ts", CONTROLLER)?;
    test.write_file("app/routes.ts", "export default [1, 2]\n")?;

    let mut cmd = test.command();
    cmd.arg("app");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r"
    app/routes.ts
      default export is not a class or object

    app/users_controller.ts (class)
      index  app/users_controller.ts:5
      store  app/users_controller.ts:7

    ✓ Found 2 methods in 2 files
    ");
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_file(
        "services/mailer.ts",
        "const mailer = {\n  send() {},\n  queue: [],\n}\n\nexport default mailer\n",
    )?;

    let mut cmd = test.json_command();
    cmd.arg("services/mailer.ts");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let value: Value = serde_json::from_str(&output.stdout)?;
    assert_json_snapshot!(value, @r#"
    [
      {
        "file": "services/mailer.ts",
        "result": {
          "kind": "object",
          "methods": [
            {
              "name": "send",
              "lineno": 2
            }
          ]
        }
      }
    ]
    "#);
    Ok(())
}

#[test]
fn test_extraction_failure_sets_exit_code() -> Result<()> {
    let test = CliTest::with_file("lib/a.ts", "export const a = 1\n")?;
    test.write_file("lib/b.ts", "export default b\n")?;
    test.write_file("lib/c.ts", "export default class {\n")?;

    let mut cmd = test.json_command();
    cmd.arg("lib");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    let value: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(value[0]["error"], "No export default declaration found");
    assert_eq!(
        value[1]["error"],
        "Could not find expression for identifier b"
    );
    assert!(value[2]["error"].as_str().is_some_and(|e| !e.is_empty()));
    Ok(())
}

#[test]
fn test_human_error_output() -> Result<()> {
    let test = CliTest::with_file("broken.ts", "export default make()\n")?;

    let mut cmd = test.command();
    cmd.arg("broken.ts");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("error: Invalid export default declaration\n  --> broken.ts")
    );
    assert!(output.stdout.contains("1 of 1 file could not be extracted"));
    Ok(())
}

#[test]
fn test_missing_path() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("nope.ts");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: Path does not exist: nope.ts"));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
    let test = CliTest::with_file("docs/readme.md", "# docs\n")?;

    let mut cmd = test.command();
    cmd.arg("docs");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("No source files found in docs"));
    assert!(test.root().join("docs/readme.md").exists());
    Ok(())
}
