use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;

fn project(files: &[(&str, &str)]) -> (TempDir, Files) {
    let dir = tempfile::tempdir().unwrap();
    for (path, text) in files {
        let path = dir.path().join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }
    let files = Files::new(dir.path());
    (dir, files)
}

fn read(dir: &TempDir, path: &str) -> String {
    fs::read_to_string(dir.path().join(path)).unwrap()
}

#[test]
fn copy_creates_parent_directories() {
    let (dir, files) = project(&[("src/original.txt", "hello")]);
    files.copy("src/original.txt", "dest/nested/copied.txt").unwrap();
    assert_eq!(read(&dir, "dest/nested/copied.txt"), "hello");
}

#[test]
fn delete_skips_missing_files() {
    let (dir, files) = project(&[("a.txt", "a"), ("b.txt", "b")]);
    files.delete(&["a.txt", "missing.txt"]).unwrap();
    assert!(!dir.path().join("a.txt").exists());
    assert!(dir.path().join("b.txt").exists());
}

#[test]
fn replace_in_file_replaces_everywhere() {
    let (dir, files) = project(&[("config.txt", "APP_NAME=Laravel # Laravel")]);
    files.replace_in_file("config.txt", "Laravel", "MyApp").unwrap();
    assert_eq!(read(&dir, "config.txt"), "APP_NAME=MyApp # MyApp");
}

#[test]
fn missing_file_is_an_error() {
    let (_dir, files) = project(&[]);
    let err = files.replace_in_file("nope.txt", "a", "b").unwrap_err();
    assert!(matches!(err, ToolError::Io { .. }));
}

#[test]
fn line_edits_keep_indentation() {
    let source = "<?php\n\nreturn [\n    'driver' => 'file',\n    // 'lifetime' => 120,\n];\n";
    let (dir, files) = project(&[("config/session.php", source)]);

    files
        .replace_line_in_file("config/session.php", "'driver'", "'driver' => 'database',")
        .unwrap();
    files
        .append_after_line("config/session.php", "'driver'", "'connection' => null,")
        .unwrap();
    files.uncomment("config/session.php", "'lifetime'").unwrap();
    assert_eq!(
        read(&dir, "config/session.php"),
        "<?php\n\nreturn [\n    'driver' => 'database',\n    'connection' => null,\n    'lifetime' => 120,\n];\n"
    );

    files.delete_lines_containing("config/session.php", "=>").unwrap();
    assert_eq!(read(&dir, "config/session.php"), "<?php\n\nreturn [\n];\n");
}

#[test]
fn uncomment_only_touches_comments() {
    let (dir, files) = project(&[("a.php", "$a = 1; // keep\n  //$b = 2;\n")]);
    files.uncomment("a.php", "$").unwrap();
    assert_eq!(read(&dir, "a.php"), "$a = 1; // keep\n  $b = 2;\n");
}

#[test]
fn append_to_file_adds_text_at_the_end() {
    let (dir, files) = project(&[("routes/web.php", "<?php\n")]);
    files
        .append_to_file("routes/web.php", "\nrequire __DIR__.'/auth.php';\n")
        .unwrap();
    assert_eq!(
        read(&dir, "routes/web.php"),
        "<?php\n\nrequire __DIR__.'/auth.php';\n"
    );
}

const ROUTES: &str = "<?php

/* @teams */
Route::get('/teams', TeamController::class);
/* @end-teams */

{/* @teams.invite */}
Route::post('/invite', InviteController::class);
    /*@end-teams.invite*/
Route::get('/', HomeController::class);
";

#[test]
fn strip_block_keeps_the_content() {
    let (dir, files) = project(&[("routes/web.php", ROUTES)]);
    files.strip_block("routes/web.php", "teams").unwrap();
    assert_eq!(
        read(&dir, "routes/web.php"),
        ROUTES
            .replace("/* @teams */\n", "")
            .replace("/* @end-teams */\n", "")
    );
}

#[test]
fn remove_block_drops_the_content() {
    let (dir, files) = project(&[("routes/web.php", ROUTES)]);
    files.remove_block("routes/web.php", "teams.invite").unwrap();
    assert_eq!(
        read(&dir, "routes/web.php"),
        "<?php\n\n/* @teams */\nRoute::get('/teams', TeamController::class);\n/* @end-teams */\n\nRoute::get('/', HomeController::class);\n"
    );
}

#[test]
fn tags_are_matched_literally() {
    let (dir, files) = project(&[("a.php", "/* @teamsXinvite */\nkeep\n")]);
    files.remove_block("a.php", "teams.invite").unwrap();
    assert_eq!(read(&dir, "a.php"), "/* @teamsXinvite */\nkeep\n");
}

#[test]
fn publish_copies_the_tree() {
    let (dir, files) = project(&[
        ("stubs/teams/app/Models/Team.php", "<?php // team\n"),
        ("stubs/teams/routes/teams.php", "<?php // routes\n"),
    ]);
    files.publish("stubs/teams").unwrap();
    assert_eq!(read(&dir, "app/Models/Team.php"), "<?php // team\n");
    assert_eq!(read(&dir, "routes/teams.php"), "<?php // routes\n");
}
