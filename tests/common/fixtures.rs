//! Test fixtures - package archives built in memory.

#![allow(dead_code)]

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

/// Library bytes placed inside fixture packages.
pub const FIXTURE_LIBRARY: &[u8] = b"\x7fELF\x02\x01\x01\0fixture libwkhtmltox";

/// Gzipped tarball with one regular file per `(path, content)` pair.
pub fn tar_gz(files: &[(&str, &[u8])]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (path, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Regular);
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_mtime(0);
        builder.append_data(&mut header, path, *content).unwrap();
    }

    builder.into_inner().unwrap().finish().unwrap()
}

/// `ar` container with the given members, as used by `.deb` files.
pub fn ar_archive(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"!<arch>\n");

    for (name, data) in members {
        write!(
            out,
            "{:<16}{:<12}{:<6}{:<6}{:<8}{:<10}`\n",
            name,
            0,
            0,
            0,
            "100644",
            data.len()
        )
        .unwrap();
        out.extend_from_slice(data);
        if data.len() % 2 == 1 {
            out.push(b'\n');
        }
    }

    out
}

/// Minimal Debian package whose data archive holds `files`.
pub fn deb(files: &[(&str, &[u8])]) -> Vec<u8> {
    let control = tar_gz(&[(
        "control",
        b"Package: wkhtmltox\nVersion: 0.12.6-1\nArchitecture: amd64\nMaintainer: test <test@example.com>\nDescription: fixture\n"
            .as_slice(),
    )]);
    let data = tar_gz(files);

    ar_archive(&[
        ("debian-binary", b"2.0\n".as_slice()),
        ("control.tar.gz", control.as_slice()),
        ("data.tar.gz", data.as_slice()),
    ])
}

/// The linux package layout, with [`FIXTURE_LIBRARY`] as the library.
pub fn wkhtmltox_deb() -> Vec<u8> {
    deb(&[("usr/local/lib/libwkhtmltox.so", FIXTURE_LIBRARY)])
}
