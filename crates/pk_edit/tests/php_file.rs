//! `PhpFile` against files on disk.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use pk_edit::{EditError, PhpFile};
use pretty_assertions::assert_eq;

const KERNEL: &str = "<?php

namespace App\\Http;

use Illuminate\\Foundation\\Http\\Kernel as HttpKernel;

class Kernel extends HttpKernel
{
    protected $middleware = [
        \\App\\Http\\Middleware\\TrustProxies::class,
    ];

    protected $middlewareAliases = [
        'auth' => \\App\\Http\\Middleware\\Authenticate::class,
    ];
}
";

#[test]
fn new_does_not_touch_the_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Missing.php");
    let mut file = PhpFile::new(&path);
    assert_eq!(file.path(), path);
    assert!(!file.save().unwrap());
    assert!(!path.exists());
}

#[test]
fn save_writes_all_queued_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Kernel.php");
    fs::write(&path, KERNEL).unwrap();

    let mut kernel = PhpFile::new(&path);
    kernel
        .add_to_array_keyed("middlewareAliases", "verified", "EnsureEmailIsVerified")
        .add_interface("Contracts\\Kernel")
        .add_import("App\\Contracts\\Kernel");
    assert_eq!(kernel.pending().len(), 3);
    assert!(kernel.save().unwrap());
    assert!(kernel.pending().is_empty());

    let expected = KERNEL
        .replace(
            "as HttpKernel;\n",
            "as HttpKernel;\nuse App\\Contracts\\Kernel;\n",
        )
        .replace(
            "extends HttpKernel\n",
            "extends HttpKernel implements Contracts\\Kernel\n",
        )
        .replace(
            "Authenticate::class,\n",
            "Authenticate::class,\n        'verified' => 'EnsureEmailIsVerified',\n",
        );
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn render_previews_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Kernel.php");
    fs::write(&path, KERNEL).unwrap();

    let mut kernel = PhpFile::new(&path);
    kernel.remove_from_array("middlewareAliases", "auth");
    let preview = kernel.render().unwrap().unwrap();
    assert!(preview.contains("protected $middlewareAliases = [];"));
    assert_eq!(fs::read_to_string(&path).unwrap(), KERNEL);
    assert_eq!(kernel.pending().len(), 1);
}

#[test]
fn dropping_pending_edits_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Kernel.php");
    fs::write(&path, KERNEL).unwrap();

    {
        let mut kernel = PhpFile::new(&path);
        kernel.add_trait("Macroable");
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), KERNEL);
}

#[test]
fn failed_save_leaves_file_and_queue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("helpers.php");
    let source = "<?php\n\nfunction helper() {}\n";
    fs::write(&path, source).unwrap();

    let mut helpers = PhpFile::new(&path);
    helpers.add_to_array("x", 1).add_trait("Macroable");
    let err = helpers.save().unwrap_err();
    assert!(matches!(err, EditError::MissingDeclaration(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
    assert_eq!(helpers.pending().len(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = PhpFile::new(dir.path().join("Nope.php"));
    file.add_trait("T");
    let err = file.save().unwrap_err();
    assert!(matches!(err, EditError::Io { .. }));
    assert!(err.to_string().starts_with("cannot access `"));
}

const USER: &str = "<?php

namespace App\\Models;

// use Illuminate\\Contracts\\Auth\\MustVerifyEmail;
use Illuminate\\Database\\Eloquent\\Factories\\HasFactory;
use Illuminate\\Foundation\\Auth\\User as Authenticatable;
use Illuminate\\Notifications\\Notifiable;

class User extends Authenticatable
{
    /** @use HasFactory<\\Database\\Factories\\UserFactory> */
    use HasFactory, Notifiable;

    /**
     * The attributes that are mass assignable.
     *
     * @var list<string>
     */
    protected $fillable = [
        'name',
        'email',
        'password',
    ];
}
";

#[test]
fn imported_trait_is_used_by_its_short_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("User.php");
    fs::write(&path, USER).unwrap();

    let mut user = PhpFile::new(&path);
    user.add_import("Laravel\\Sanctum\\HasApiTokens")
        .add_trait("HasApiTokens");
    assert!(user.save().unwrap());

    let expected = USER
        .replace(
            "use Illuminate\\Notifications\\Notifiable;\n",
            "use Illuminate\\Notifications\\Notifiable;\nuse Laravel\\Sanctum\\HasApiTokens;\n",
        )
        .replace(
            "    use HasFactory, Notifiable;\n",
            "    use HasFactory, Notifiable, HasApiTokens;\n",
        );
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}
