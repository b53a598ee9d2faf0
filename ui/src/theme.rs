pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #121212;
  --text: #ffffff;
  --text-dim: #d1d5db;
  --text-muted: #9ca3af;
  --nav-hover: #d1d5db;
  --divider: #333333;
  --avatar-bg: #374151;
  --font-body: "Helvetica Neue", Helvetica, Arial, sans-serif;
  --theme-transition: background 0.3s, color 0.3s;
}

.light-theme {
  --bg: #ffffff;
  --text: #000000;
  --text-dim: #222222;
  --text-muted: #888888;
  --nav-hover: #222222;
}

* { box-sizing: border-box; }
html, body { margin: 0; padding: 0; }

.site-shell {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  display: flex;
  font-family: var(--font-body);
  transition: var(--theme-transition);
}

.sidebar {
  width: 352px;
  background: var(--bg);
  padding: 128px 0 0 128px;
  position: fixed;
  top: 0;
  left: 0;
  height: 100vh;
  z-index: 1000;
  transition: background 0.3s;
}
.sidebar-inner { display: flex; flex-direction: column; gap: 10px; height: 100%; position: relative; }

.nav-link {
  color: var(--text-muted);
  text-decoration: none;
  display: block;
  font-size: 16px;
  font-weight: 400;
  transition: color 0.2s, font-weight 0.2s;
  cursor: pointer;
}
.nav-link:hover { color: var(--nav-hover); }
.nav-link.active { color: var(--text); font-weight: 700; }

.sidebar-divider { width: 40%; border-bottom: 1px solid var(--divider); margin: 20px 0; }
.contact-links { display: flex; flex-direction: column; gap: 10px; }
.sidebar-footer {
  position: absolute;
  left: 0;
  bottom: 32px;
  width: 100%;
  color: #888;
  font-size: 13px;
  line-height: 1.5;
  text-align: left;
  white-space: pre-line;
  pointer-events: none;
  user-select: none;
}

.content {
  margin-left: 480px;
  flex: 1;
  padding: 128px 128px 32px 0;
  min-height: 100vh;
  overflow-y: auto;
  width: calc(100vw - 480px);
}

.theme-toggle {
  position: fixed;
  top: 32px;
  right: 48px;
  z-index: 1200;
  background: none;
  border: none;
  color: var(--text);
  font-size: 22px;
  line-height: 1;
  cursor: pointer;
  padding: 8px;
}

.intro { margin-bottom: 60px; }
.headline { font-size: 36px; font-weight: 700; margin: 0 0 16px; }
.tagline { font-size: 18px; color: var(--text-dim); line-height: 1.6; max-width: 600px; margin: 0; }
.tagline strong { font-weight: 500; }

.content-section { margin-bottom: 60px; }
.content-section.past { margin-bottom: 100px; }
.section-label { color: var(--text-muted); font-size: 14px; font-style: italic; margin: 0 0 16px; }
.role-now { font-size: 18px; margin: 0; }

.role-list { display: flex; flex-direction: column; gap: 48px; }
.role-entry { display: flex; }
.year-label { color: var(--text-muted); font-size: 14px; width: 64px; flex-shrink: 0; }
.role-body { flex: 1; }
.role-title { font-size: 18px; margin: 0 0 12px; }
.role-summary { color: var(--text-dim); font-size: 14px; line-height: 1.6; margin: 0 0 12px; max-width: 600px; }
.tools-text { color: var(--text-muted); font-size: 14px; margin: 0; }

.underline-link { text-decoration: underline; color: inherit; }
.underline-link:hover { color: inherit; }

.dive-deeper { margin-bottom: 128px; }
.dive-title { font-size: 24px; font-weight: 700; margin: 0 0 48px; }
.about-row { display: flex; gap: 32px; align-items: flex-start; }
.avatar {
  width: 150px;
  height: 150px;
  border-radius: 50%;
  background: var(--avatar-bg);
  object-fit: cover;
  flex-shrink: 0;
}
.about-body { flex: 1; min-width: 0; max-width: 600px; }
.synopsis-text { color: var(--text-dim); font-size: 14px; line-height: 1.6; margin: 0; }

.mobile-gate {
  min-height: 100vh;
  background: #121212;
  color: #ffffff;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 20px;
  text-align: center;
  font-family: var(--font-body);
}
.mobile-gate-text { font-size: 20px; max-width: 400px; line-height: 1.5; }

.neon-cursor-canvas { position: fixed; inset: 0; pointer-events: none; z-index: 1500; }
"#;

#[cfg(test)]
mod tests {
    use super::GLOBAL_CSS;

    /// Token names declared inside the block for `selector`.
    fn block_tokens(selector: &str) -> Vec<String> {
        let start = GLOBAL_CSS.find(selector).expect("selector present");
        let open = GLOBAL_CSS[start..].find('{').unwrap() + start;
        let close = GLOBAL_CSS[open..].find('}').unwrap() + open;
        GLOBAL_CSS[open + 1..close]
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                line.starts_with("--").then(|| {
                    format!("--{}", line.trim_start_matches("--").split(':').next().unwrap().trim())
                })
            })
            .collect()
    }

    #[test]
    fn light_theme_overrides_every_themed_token() {
        let expected = ["--bg", "--text", "--text-dim", "--text-muted", "--nav-hover"];
        let light = block_tokens(".light-theme");
        for token in expected {
            assert!(light.iter().any(|t| t == token), "missing {token}");
        }
        assert_eq!(light.len(), expected.len());
    }

    #[test]
    fn light_tokens_all_have_dark_defaults() {
        let dark = block_tokens(":root");
        for token in block_tokens(".light-theme") {
            assert!(dark.contains(&token), "{token} has no :root default");
        }
    }
}
