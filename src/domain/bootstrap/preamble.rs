use crate::domain::project::RUNTIME_MODULE_NAME;

/// Lines prepended to the copied entry script.
///
/// The first line puts the script's own directory (where the runtime module is
/// copied) on the module search path, the second imports the runtime.
pub fn preamble() -> String {
    format!(
        "$Env:PSModulePath = $Env:PSModulePath + [IO.Path]::PathSeparator + $PSScriptRoot\n\
         Import-Module {RUNTIME_MODULE_NAME}\n"
    )
}

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Prepend the bootstrap preamble to the raw entry script bytes.
///
/// The script's encoding is not interpreted. A leading UTF-8 BOM stays at the
/// start of the file, ahead of the preamble; every other byte follows the
/// preamble unchanged.
pub fn inject_preamble(entry: &[u8]) -> Vec<u8> {
    let preamble = preamble();
    let (bom, body) = match entry.strip_prefix(UTF8_BOM) {
        Some(rest) => (UTF8_BOM, rest),
        None => (&[][..], entry),
    };

    let mut injected = Vec::with_capacity(bom.len() + preamble.len() + body.len());
    injected.extend_from_slice(bom);
    injected.extend_from_slice(preamble.as_bytes());
    injected.extend_from_slice(body);
    injected
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn preamble_is_two_lines() {
        let text = preamble();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("$Env:PSModulePath"));
        assert!(lines[0].contains("$PSScriptRoot"));
        assert_eq!(lines[1], "Import-Module UniversalDashboard");
    }

    #[test]
    fn empty_script_gets_only_preamble() {
        assert_eq!(inject_preamble(b""), preamble().into_bytes());
    }

    #[test]
    fn bom_stays_at_start_of_file() {
        let script = b"\xEF\xBB\xBFStart-UDDashboard -Wait\n";

        let injected = inject_preamble(script);

        assert!(injected.starts_with(UTF8_BOM));
        let after_bom = &injected[UTF8_BOM.len()..];
        assert!(after_bom.starts_with(preamble().as_bytes()));
        assert_eq!(&after_bom[preamble().len()..], b"Start-UDDashboard -Wait\n");
        assert_eq!(injected.windows(3).filter(|w| *w == UTF8_BOM).count(), 1);
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let script = b"# Caf\xe9\nStart-UDDashboard -Wait\n";

        let injected = inject_preamble(script);

        assert_eq!(&injected[preamble().len()..], &script[..]);
    }

    proptest! {
        #[test]
        fn original_text_is_preserved_after_preamble(text in any::<String>()) {
            prop_assume!(!text.as_bytes().starts_with(UTF8_BOM));
            let injected = inject_preamble(text.as_bytes());
            let preamble = preamble();
            prop_assert!(injected.starts_with(preamble.as_bytes()));
            prop_assert_eq!(&injected[preamble.len()..], text.as_bytes());
        }

        #[test]
        fn original_bytes_are_preserved_after_preamble(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            prop_assume!(!bytes.starts_with(UTF8_BOM));
            let injected = inject_preamble(&bytes);
            prop_assert_eq!(&injected[preamble().len()..], bytes.as_slice());
        }
    }
}
