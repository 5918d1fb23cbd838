use assert_cmd::Command;

pub fn tagpath_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagpath").unwrap();
    cmd.env_remove("TAGPATH_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
