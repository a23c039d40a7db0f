use std::env;

include!("src/options.rs");

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/options.rs");

    if env::var("PROFILE").unwrap_or_default() == "release" {
        let out_dir = std::path::PathBuf::from(
            std::env::var_os("OUT_DIR").ok_or(std::io::ErrorKind::NotFound)?,
        )
        .parent()
        .ok_or(std::io::ErrorKind::NotFound)?
        .join("man");
        std::fs::create_dir_all(&out_dir)?;

        let cmd = clap::Command::new(PROGRAM_NAME)
            .about("Inter-component communication analysis for Android applications")
            .before_help(COPYRIGHT)
            .disable_help_flag(true)
            .args(BASE_OPTIONS.iter().chain(IC3_OPTIONS).map(OptionSpec::to_arg));

        use clap_mangen::Man;
        let man = Man::new(cmd);
        let mut buffer: Vec<u8> = Default::default();
        man.render(&mut buffer)?;

        std::fs::write(out_dir.join(vec![PROGRAM_NAME, ".1"].join("")), buffer)?;
    }

    Ok(())
}

// Local Variables:
// rust-format-on-save: t
// End:
