//! End-to-end tests for `stencil/component-member-order`.

use vellum_carton::LineIndex;
use vellum_patina::{LintConfig, Linter, Severity};

/// Lint `source` with the rule configured by `setting` and render one line
/// per diagnostic: `<line>: <message>` or `<start>-<end>: <message>`.
fn lint(setting: &str, source: &str) -> String {
    let config = LintConfig::from_json_str(&format!(
        r#"{{ "rules": {{ "stencil/component-member-order": {setting} }} }}"#
    ))
    .unwrap();
    let result = Linter::from_config(&config)
        .unwrap()
        .lint_source(source, "component.tsx");

    let index = LineIndex::new(source);
    result
        .diagnostics
        .iter()
        .map(|d| {
            let (start, _) = index.line_col(d.start);
            let (end, _) = index.line_col(d.end);
            if start == end {
                format!("{start}: {}", d.message)
            } else {
                format!("{start}-{end}: {}", d.message)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn recommended_order_accepts_conventional_component() {
    let source = r#"@Component({ tag: 'ion-toggle', shadow: true })
export class Toggle {
  private gestureId = 0;
  @Element() el!: HTMLElement;
  @State() activated = false;
  @Prop({ context: 'config' }) config!: Config;
  @Prop() name = 'toggle';
  @Prop() checked = false;
  @Event() ionChange!: EventEmitter;
  componentWillLoad() {}
  @Listen('click') onClick() {}
  @Method() async setFocus() {}
  private emitStyle() {}
  render() { return null; }
}
"#;
    insta::assert_snapshot!(lint(r#""warn""#, source), @"");
}

#[test]
fn recommended_order_reports_misplaced_role() {
    let source = r#"@Component({ tag: 'my-el' })
export class MyEl {
  @Event() changed!: EventEmitter;
  @Prop() value = '';
  @State() open = false;
  render() { return null; }
}
"#;
    insta::assert_snapshot!(lint(r#""warn""#, source), @r###"3: Component member "event" should be placed between "prop" and "stencil-method""###);
}

#[test]
fn every_member_of_misplaced_role_is_reported() {
    let source = r#"@Component({ tag: 'my-el' })
export class MyEl {
  @Prop() first = '';
  @Prop() second = '';
  @State() open = false;
}
"#;
    insta::assert_snapshot!(
        lint(r#"["warn", { "order": ["state", "prop"] }]"#, source),
        @r###"
    3: Component member "prop" should be placed after "state"
    4: Component member "prop" should be placed after "state"
    "###
    );
}

#[test]
fn ungrouped_members_are_reported_as_one_range() {
    let source = r#"@Component({ tag: 'my-el' })
export class MyEl {
  @Prop() first = '';
  @State() open = false;
  @Prop() second = '';
  helper() {}
}
"#;
    insta::assert_snapshot!(
        lint(r#"["warn", { "order": ["state", "prop", "own-method"] }]"#, source),
        @"3-5: Component members of the same type should be grouped together"
    );
}

#[test]
fn watcher_must_precede_watched_member() {
    let source = r#"@Component({ tag: 'my-el' })
export class MyEl {
  @Watch('value') valueChanged() {}
  @Prop() value = '';
  @Prop() other = '';
  @State() open = false;
  @Watch('open') openChanged() {}
}
"#;
    insta::assert_snapshot!(
        lint(r#"["warn", { "order": false, "watch-follows-prop": true }]"#, source),
        @"7: Watch methods should immediately precede the declaration of the Prop/State they watch"
    );
}

#[test]
fn alphabetical_checks_ordered_roles_only() {
    let source = r#"@Component({ tag: 'my-el' })
export class MyEl {
  alpha = 1;
  beta = 2;
  @Prop() zeta = '';
  @Prop() Eta = '';
  render() { return null; }
  componentDidLoad() {}
}
"#;
    insta::assert_snapshot!(
        lint(
            r#"["warn", { "order": ["own-prop", "prop", "stencil-method"], "alphabetical": true }]"#,
            source
        ),
        @"5-6: Component members of the same type should be alphabetized"
    );
}

#[test]
fn nested_components_are_checked_and_plain_classes_skipped() {
    let source = r#"export class Helper {
  @Prop() b = '';
  @State() a = 1;
  @Prop() c = '';
}
@Component({ tag: 'outer-el' })
export class Outer {
  render() {
    @Component({ tag: 'inner-el' })
    class Inner {
      @State() s = 1;
      @Prop() p = '';
    }
    return Inner;
  }
  @Prop() value = '';
}
"#;
    insta::assert_snapshot!(
        lint(r#"["warn", { "order": ["prop", "state", "stencil-method"] }]"#, source),
        @r###"
    8-15: Component member "stencil-method" should be placed after "prop"
    11: Component member "state" should be placed after "prop"
    "###
    );
}

#[test]
fn disabled_rule_reports_nothing() {
    let source = r#"@Component({ tag: 'my-el' })
export class MyEl {
  render() { return null; }
  @Prop() value = '';
}
"#;
    insta::assert_snapshot!(lint(r#""off""#, source), @"");
}

#[test]
fn configured_severity_is_applied() {
    let config = LintConfig::from_json_str(
        r#"{ "rules": { "stencil/component-member-order": ["error", { "alphabetical": true }] } }"#,
    )
    .unwrap();
    let result = Linter::from_config(&config).unwrap().lint_source(
        "@Component({ tag: 'my-el' })\nclass MyEl {\n  b = 1;\n  a = 2;\n}\n",
        "my-el.tsx",
    );
    assert_eq!(result.error_count, 1);
    assert_eq!(result.warning_count, 0);
    assert_eq!(result.diagnostics[0].severity, Severity::Error);
}
