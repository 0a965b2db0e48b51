use uri_locator::display::*;

#[test]
fn tilde() {
    assert_eq!(replace_home_dir_with_tilde("/home/me", "/home/me"), "~");
    assert_eq!(replace_home_dir_with_tilde("/home/me/", "/home/me"), "~/");
    assert_eq!(replace_home_dir_with_tilde("/home/me/a/b", "/home/me"), "~/a/b");
    assert_eq!(replace_home_dir_with_tilde("/home/mex", "/home/me"), "/home/mex");
    assert_eq!(replace_home_dir_with_tilde("/srv", "/home/me"), "/srv");
    assert_eq!(replace_home_dir_with_tilde("/srv", ""), "/srv");
    assert_eq!(replace_home_dir_with_tilde("/srv", "/"), "/srv");
}

#[test]
fn dirnames() {
    assert_eq!(uri_dirname("/home/me/src/a.rs", Some("/home/me")).as_deref(), Some("~/src"));
    assert_eq!(uri_dirname("/home/me/src/a.rs", None).as_deref(), Some("/home/me/src"));
    assert_eq!(uri_dirname("file:///a", None).as_deref(), Some("file:"));
    assert_eq!(uri_dirname("a.rs", Some("/home/me")), None);
    assert_eq!(uri_dirname("", None), None);
}

#[test]
fn dirname_with_mount() {
    assert_eq!(
        dirname_for_display("smb://server/share/a%20dir/f.txt", Some("share on server"), None)
            .as_deref(),
        Some("share on server /share/a dir")
    );
    // The path "/f.txt" has the root as its directory.
    assert_eq!(
        dirname_for_display("ftp://host/f.txt", Some("host"), None).as_deref(),
        Some("host /")
    );
    // No directory part at all.
    assert_eq!(
        dirname_for_display("mailto:x", Some("mail"), None).as_deref(),
        Some("mail")
    );
    // Not a URI: the parse name is used as the path.
    assert_eq!(
        dirname_for_display("/media/usb/docs/a.txt", Some("USB"), None).as_deref(),
        Some("USB /media/usb/docs")
    );
}

#[test]
fn dirname_without_mount() {
    assert_eq!(
        dirname_for_display("/home/me/a.txt", None, Some("/home/me")).as_deref(),
        Some("~")
    );
    assert_eq!(dirname_for_display("a.txt", None, None), None);
}

#[test]
fn remote_root() {
    assert_eq!(
        remote_root_display_name("ftp://ftp.example.com").as_deref(),
        Some("/ on ftp.example.com")
    );
    assert_eq!(
        remote_root_display_name("sftp://me@host:22/").as_deref(),
        Some("/ on host")
    );
    assert_eq!(remote_root_display_name("file:///"), None);
    assert_eq!(remote_root_display_name("mailto:"), None);
    assert_eq!(remote_root_display_name("sftp://host/x"), None);
    assert_eq!(remote_root_display_name("not a uri"), None);
}

#[test]
fn basenames() {
    assert_eq!(basename_for_display("file:///home/me/a%20b.txt"), "a b.txt");
    assert_eq!(basename_for_display("sftp://me@host:22/srv/www/"), "www");
    assert_eq!(basename_for_display("http://h/a%2Fb"), "a/b");
    assert_eq!(basename_for_display("mailto:foo@bar.com"), "foo@bar.com");
    assert_eq!(basename_for_display("/home/me/notes.md"), "notes.md");
    assert_eq!(basename_for_display("relative%20name"), "relative%20name");
}

#[test]
fn basename_of_root() {
    assert_eq!(basename_for_display("smb://server/"), "/ on server");
    assert_eq!(basename_for_display("ftp://ftp.example.com"), "/ on ftp.example.com");
    assert_eq!(basename_for_display("file:///"), "/");
    assert_eq!(basename_for_display("/"), "/");
    assert_eq!(basename_for_display(""), ".");
}

#[test]
fn basename_undecodable() {
    assert_eq!(basename_for_display("file:///tmp/%FF.txt"), "%FF.txt");
    assert_eq!(basename_for_display("http://h/dir/100%"), "100%");
    // Only the last segment has to decode.
    assert_eq!(basename_for_display("http://h/%zz/a%20b"), "a b");
    assert_eq!(basename_for_display("http://h/a%00"), "a%00");
}
