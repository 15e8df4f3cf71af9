pub fn run() -> anyhow::Result<()> {
    println!("obsfile {}", env!("CARGO_PKG_VERSION"));
    println!("Observation file validator for reservoir history matching");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
