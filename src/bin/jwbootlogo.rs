// Copyright 2024 Chris Ridd <chrisridd@mac.com>. All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are
// met:
//
//    * Redistributions of source code must retain the above copyright
// notice, this list of conditions and the following disclaimer.
//    * Redistributions in binary form must reproduce the above
// copyright notice, this list of conditions and the following disclaimer
// in the documentation and/or other materials provided with the
// distribution.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
// "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
// LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
// A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT
// OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
// SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE,
// DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY
// THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
// (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::path::{Path, PathBuf};
use std::process::exit;

use bmpblob::{build_blob, BLOB_FILE_NAME};
use clap::*;

const USAGE: &str = "jwbootlogo input1080p.{jpg/tga/png} [input720p.xxx input480p.xxx]";

const DETAILS: &str = "\
outputs a file named bmp.blob in the working directory.
The input image should be 1920x1080 pixels; you can also provide 1280x720 and
640x480 versions, although these will be computed (scaled/cropped) from the
1080p if not provided. (You must provide 1 or 3 images.)";

fn usage(mut cmd: Command) -> ! {
    eprint!("{}", cmd.render_help());
    exit(1)
}

fn main() {
    let cmd = command!()
        .about("Prepare a bmp.blob to replace the Jetson bootloader start-up logo")
        .author(crate_authors!("\n"))
        .version(crate_version!())
        .override_usage(USAGE)
        .after_help(DETAILS)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("images")
                .value_parser(value_parser!(PathBuf))
                .num_args(1..)
                .allow_hyphen_values(true)
                .required(true),
        );

    // clap swallows a leading `--`, so look at the raw first argument
    let first = std::env::args_os().nth(1);
    if first.is_some_and(|a| a.to_string_lossy().starts_with('-')) {
        usage(cmd);
    }

    let args = match cmd.clone().try_get_matches() {
        Ok(args) => args,
        Err(_) => usage(cmd),
    };
    let images: Vec<&PathBuf> = match args.get_many::<PathBuf>("images") {
        Some(images) => images.collect(),
        None => usage(cmd),
    };
    let smaller = match images.len() {
        1 => None,
        3 => Some((images[1].as_path(), images[2].as_path())),
        _ => usage(cmd),
    };
    match build_blob(images[0], smaller, Path::new(BLOB_FILE_NAME)) {
        Ok(_) => eprintln!("created {}", BLOB_FILE_NAME),
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}
