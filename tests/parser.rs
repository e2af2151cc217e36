use phpantom_reflection::parser::parse_php;
use phpantom_reflection::{ClassLikeKind, Visibility};

#[test]
fn parse_class_with_namespace_and_imports() {
    let php = r#"<?php
namespace App\Http;

use Illuminate\Http\Request;
use App\Models\{User, Team as Group};
use function App\helper;

class Controller extends Base\Controller
{
    use Concerns\Authorizes;

    /** @var Request */
    protected $request;

    public function index() {}
}
"#;
    let parsed = parse_php(php);
    assert_eq!(parsed.classes.len(), 1);

    let class = &parsed.classes[0];
    assert_eq!(class.kind, ClassLikeKind::Class);
    assert_eq!(class.fqn(), "App\\Http\\Controller");
    assert_eq!(class.parent_class.as_deref(), Some("App\\Http\\Base\\Controller"));
    assert_eq!(class.used_traits, ["App\\Http\\Concerns\\Authorizes"]);

    let ctx = parsed.context_for(class).expect("class has a context");
    assert_eq!(ctx.namespace.as_deref(), Some("App\\Http"));
    assert_eq!(ctx.import("Request"), Some("Illuminate\\Http\\Request"));
    assert_eq!(ctx.import("user"), Some("App\\Models\\User"));
    assert_eq!(ctx.import("Group"), Some("App\\Models\\Team"));
    assert_eq!(ctx.import("helper"), None);
}

#[test]
fn parse_property_docblocks_and_defaults() {
    let php = r#"<?php
class Settings
{
    /**
     * Maximum attempts.
     * @var int
     */
    public static $retries = 3;

    // not a docblock
    private ?string $label = null;

    /** @var string[] */
    protected $a = ['x', 'y'], $b;
}
"#;
    let parsed = parse_php(php);
    let class = &parsed.classes[0];
    let props: Vec<&str> = class.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(props, ["retries", "label", "a", "b"]);

    let retries = &class.properties[0];
    assert!(retries.is_static);
    assert_eq!(retries.visibility, Visibility::Public);
    assert_eq!(retries.default_value.as_deref(), Some("3"));
    assert!(
        retries
            .doc_comment
            .as_deref()
            .is_some_and(|doc| doc.contains("@var int"))
    );

    let label = &class.properties[1];
    assert_eq!(label.visibility, Visibility::Private);
    assert_eq!(label.doc_comment, None);
    assert_eq!(label.default_value.as_deref(), Some("null"));

    let (a, b) = (&class.properties[2], &class.properties[3]);
    assert_eq!(a.default_value.as_deref(), Some("['x', 'y']"));
    assert_eq!(b.default_value, None);
    assert_eq!(a.doc_comment, b.doc_comment);
}

#[test]
fn parse_promoted_constructor_properties() {
    let php = r#"<?php
final class Point
{
    public function __construct(
        /** @var float */
        public readonly float $x,
        protected float $y,
        int $scale = 1,
    ) {}
}
"#;
    let parsed = parse_php(php);
    let class = &parsed.classes[0];
    let props: Vec<&str> = class.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(props, ["x", "y"]);
    assert_eq!(class.properties[1].visibility, Visibility::Protected);
    assert!(
        class.properties[0]
            .doc_comment
            .as_deref()
            .is_some_and(|doc| doc.contains("@var float"))
    );
    assert_eq!(class.methods[0].name, "__construct");
}

#[test]
fn parse_method_modifiers() {
    let php = r#"<?php
abstract class Shape
{
    abstract protected function area(): float;
    final public static function unit(): static {}
    function implicit() {}
    private function hidden() {}
}
"#;
    let parsed = parse_php(php);
    let methods = &parsed.classes[0].methods;
    assert_eq!(methods.len(), 4);

    assert!(methods[0].is_abstract);
    assert_eq!(methods[0].visibility, Visibility::Protected);

    assert!(methods[1].is_final);
    assert!(methods[1].is_static);

    assert_eq!(methods[2].visibility, Visibility::Public);
    assert!(!methods[2].is_static);

    assert_eq!(methods[3].visibility, Visibility::Private);
}

#[test]
fn parse_interfaces_and_traits() {
    let php = r#"<?php
namespace Contracts;

interface Repository extends Countable
{
    public function find(int $id);
}

trait Timestamps
{
    /** @var \DateTimeInterface|null */
    public $updatedAt;

    public function touch(): void {}
}
"#;
    let parsed = parse_php(php);
    assert_eq!(parsed.classes.len(), 2);

    let iface = &parsed.classes[0];
    assert_eq!(iface.kind, ClassLikeKind::Interface);
    assert_eq!(iface.parent_class.as_deref(), Some("Contracts\\Countable"));
    assert!(iface.methods[0].is_abstract);

    let tr = &parsed.classes[1];
    assert_eq!(tr.kind, ClassLikeKind::Trait);
    assert_eq!(tr.fqn(), "Contracts\\Timestamps");
    assert_eq!(tr.properties[0].name, "updatedAt");
    assert_eq!(tr.methods[0].name, "touch");
}

#[test]
fn parse_braced_namespaces() {
    let php = r#"<?php
namespace Alpha {
    class One {}
}
namespace Beta {
    class Two extends \Alpha\One {}
}
"#;
    let parsed = parse_php(php);
    let fqns: Vec<String> = parsed.classes.iter().map(|c| c.fqn()).collect();
    assert_eq!(fqns, ["Alpha\\One", "Beta\\Two"]);
    assert_eq!(parsed.classes[1].parent_class.as_deref(), Some("Alpha\\One"));
    let beta = parsed
        .context_for(&parsed.classes[1])
        .expect("class has a context");
    assert_eq!(beta.namespace.as_deref(), Some("Beta"));
}

#[test]
fn imports_stay_in_their_namespace_block() {
    let php = r#"<?php
namespace One {
    use Vendor\Foo;
    class A extends Foo {}
}
namespace Two {
    use Vendor\Bar as Foo2;
    class B extends Foo {}
}
namespace {
    use Vendor\Baz;
    class C extends Baz {}
}
"#;
    let parsed = parse_php(php);
    let parents: Vec<Option<&str>> = parsed
        .classes
        .iter()
        .map(|c| c.parent_class.as_deref())
        .collect();
    assert_eq!(
        parents,
        [Some("Vendor\\Foo"), Some("Two\\Foo"), Some("Vendor\\Baz")]
    );

    let contexts: Vec<_> = parsed.classes_with_context().map(|(_, ctx)| ctx).collect();
    assert_eq!(contexts[0].import("Foo"), Some("Vendor\\Foo"));
    assert_eq!(contexts[0].import("Foo2"), None);
    assert_eq!(contexts[1].import("Foo"), None);
    assert_eq!(contexts[1].import("Foo2"), Some("Vendor\\Bar"));
    assert_eq!(contexts[2].namespace, None);
    assert_eq!(contexts[2].import("Baz"), Some("Vendor\\Baz"));
}

#[test]
fn global_classes_share_top_level_imports() {
    let php = r#"<?php
use Lib\Base;
class First extends Base {}
class Second extends First {}
"#;
    let parsed = parse_php(php);
    assert_eq!(parsed.classes[0].parent_class.as_deref(), Some("Lib\\Base"));
    assert_eq!(parsed.classes[1].parent_class.as_deref(), Some("First"));
}

#[test]
fn parse_garbage_is_empty() {
    assert!(parse_php("").classes.is_empty());
    assert!(parse_php("just some text").classes.is_empty());
}
