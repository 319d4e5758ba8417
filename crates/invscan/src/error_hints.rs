use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("failed to run") {
        push_hint(
            &mut out,
            "Install Ansible so `ansible-inventory` is on PATH (e.g. `pip install ansible-core`).",
        );
        push_hint(
            &mut out,
            "Or point at another program with `--ansible-inventory <CMD>` or `INVSCAN_ANSIBLE_INVENTORY`.",
        );
    }

    if haystack.contains("inventory path does not exist") || haystack.contains("failed to read") {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("exited with") {
        push_hint(
            &mut out,
            "Run `ansible-inventory -i <path> --list` directly to see the full error.",
        );
    }

    if haystack.contains("failed to parse json output") || haystack.contains("invalid json") {
        push_hint(
            &mut out,
            "`--from-json` expects the output of `ansible-inventory --list`.",
        );
    }

    if haystack.contains("no inventory given") {
        push_hint(
            &mut out,
            "Pass an inventory path, e.g. `invscan inventory/hosts.ini`.",
        );
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(
            &mut out,
            "Check `invscan.toml` syntax and key names (`[scan]`, `[output]`).",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
