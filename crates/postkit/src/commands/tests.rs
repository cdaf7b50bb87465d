use pk_edit::{Edit, Scalar};
use pk_ir::SourceMap;
use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_owned()).collect()
}

#[test]
fn php_flags_become_edits_in_order() {
    let parsed = parse_php_args(&args(&[
        "app/Models/User.php",
        "--add-trait=SoftDeletes",
        "--add-import=Illuminate\\Database\\Eloquent\\SoftDeletes",
        "--add-to-array=casts,deleted_at,datetime",
        "--add-to-array=fillable,deleted_at",
        "--remove-from-array=hidden,password",
        "--dry-run",
    ]))
    .unwrap();
    assert_eq!(parsed.file, std::path::PathBuf::from("app/Models/User.php"));
    assert!(parsed.dry_run);
    assert_eq!(
        parsed.edits,
        vec![
            Edit::add_trait("SoftDeletes"),
            Edit::add_import("Illuminate\\Database\\Eloquent\\SoftDeletes"),
            Edit::add_to_array_keyed("casts", "deleted_at", "datetime"),
            Edit::add_to_array("fillable", "deleted_at"),
            Edit::remove_from_array("hidden", "password"),
        ]
    );
}

#[test]
fn array_values_are_json_scalars() {
    let parsed = parse_php_args(&args(&["a.php", "--add-to-array=ports,8080"])).unwrap();
    assert_eq!(parsed.edits, vec![Edit::add_to_array("ports", Scalar::Int(8080))]);
}

#[test]
fn php_usage_errors() {
    let cases: &[(&[&str], &str)] = &[
        (&["--add-trait=A"], "missing file path"),
        (&["a.php"], "no edits given"),
        (&["a.php", "--rename=B"], "unknown option `--rename`"),
        (&["a.php", "--verbose"], "unknown option `--verbose`"),
        (&["a.php", "b.php", "--add-trait=A"], "unexpected argument `b.php`"),
        (
            &["a.php", "--remove-from-array=hidden"],
            "--remove-from-array expects <target>,<search>",
        ),
        (
            &["a.php", "--add-to-array=fillable"],
            "--add-to-array expects <target>,[<key>,]<value>",
        ),
    ];
    for (list, message) in cases {
        let err = parse_php_args(&args(list)).unwrap_err();
        assert_eq!(err.to_string(), *message, "{list:?}");
    }
}

#[test]
fn config_and_env_arguments() {
    let config = parse_config_args(&args(&["config/app.php", "debug", "true"])).unwrap();
    assert_eq!(config.key, "debug");
    assert_eq!(config.value, Scalar::Bool(true));
    assert!(!config.dry_run);
    assert!(parse_config_args(&args(&["config/app.php", "debug"])).is_err());

    let env = parse_env_args(&args(&["APP_NAME", "My App", "--dir=site"])).unwrap();
    assert_eq!(
        env,
        EnvArgs {
            dir: "site".into(),
            key: "APP_NAME".to_owned(),
            value: "My App".to_owned(),
        }
    );
}

#[test]
fn outline_lists_structured_nodes() {
    let mut sources = SourceMap::new();
    let file = pk_parse::parse_file(
        &mut sources,
        "<?php\nnamespace App;\n\nuse App\\{A, B};\n\nfinal class User extends Model implements C\n{\n    use HasFactory;\n    protected $casts = ['a' => 'b'], $x;\n    public function boot() {}\n    const Y = 1;\n}\n",
    )
    .unwrap();
    assert_eq!(
        outline(&file),
        "  namespace App
    use App\\A, App\\B
    class User implements C
      use HasFactory
      property $casts = array of 1, $x
      method boot
      member
"
    );
}
