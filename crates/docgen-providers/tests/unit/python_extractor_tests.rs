//! Tests for the tree-sitter Python entity extractor

use docgen_domain::ports::providers::EntityExtractor;
use docgen_domain::{CodeEntity, EntityKind};
use docgen_providers::language::PythonEntityExtractor;

fn extract(source: &str) -> Vec<CodeEntity> {
    PythonEntityExtractor::new().extract(source)
}

#[test]
fn test_single_function_spans_whole_input() {
    let source = "def add(a, b):\n    return a + b";

    let entities = extract(source);

    assert_eq!(entities, vec![CodeEntity::function("add", source)]);
}

#[test]
fn test_trailing_newline_is_not_part_of_span() {
    let entities = extract("def add(a, b):\n    return a + b\n\n");

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].source_text, "def add(a, b):\n    return a + b");
}

#[test]
fn test_class_precedes_its_methods() {
    let source = "class Foo:\n    def bar(self):\n        return 1\n";

    let entities = extract(source);

    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].kind, EntityKind::Class);
    assert_eq!(entities[0].name, "Foo");
    assert_eq!(
        entities[0].source_text,
        "class Foo:\n    def bar(self):\n        return 1"
    );
    assert_eq!(entities[1].kind, EntityKind::Method);
    assert_eq!(entities[1].name, "Foo.bar");
    assert_eq!(entities[1].source_text, "def bar(self):\n        return 1");
}

#[test]
fn test_async_functions_and_methods() {
    let source = "\
async def fetch(url):
    return await get(url)

class Client:
    async def close(self):
        pass
";
    let entities = extract(source);

    let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["fetch", "Client", "Client.close"]);
    assert_eq!(entities[0].kind, EntityKind::Function);
    assert!(entities[0].source_text.starts_with("async def fetch"));
    assert_eq!(entities[2].kind, EntityKind::Method);
}

#[test]
fn test_decorators_are_excluded_from_span() {
    let source = "\
@cache
def compute(x):
    return x * 2

class Shape:
    @property
    def area(self):
        return 0
";
    let entities = extract(source);

    assert_eq!(entities.len(), 3);
    assert_eq!(entities[0].name, "compute");
    assert_eq!(entities[0].source_text, "def compute(x):\n    return x * 2");
    assert_eq!(entities[2].name, "Shape.area");
    assert_eq!(entities[2].source_text, "def area(self):\n        return 0");
}

#[test]
fn test_ignores_statements_imports_and_nested_definitions() {
    let source = "\
import os
from typing import List

CONSTANT = 3

def outer():
    def inner():
        pass
    return inner

class Node:
    kind = 'leaf'

    class Meta:
        pass

    def visit(self):
        def helper():
            pass
        return helper

if __name__ == '__main__':
    def main():
        pass
";
    let entities = extract(source);

    let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["outer", "Node", "Node.visit"]);
}

#[test]
fn test_count_matches_definitions() {
    let source = "\
def a():
    pass

class B:
    def b1(self):
        pass

    def b2(self):
        pass

async def c():
    pass

class D:
    pass
";
    let entities = extract(source);

    // 4 top-level definitions plus 2 methods
    assert_eq!(entities.len(), 6);
    let count = |kind| entities.iter().filter(|e| e.kind == kind).count();
    assert_eq!(count(EntityKind::Function), 2);
    assert_eq!(count(EntityKind::Class), 2);
    assert_eq!(count(EntityKind::Method), 2);
}

#[test]
fn test_source_text_is_exact_substring() {
    let source = "\
def spaced( a ,  b ):   # odd formatting kept
    return (a +
            b)

class   Weird :
    def   m ( self ) :
        '''doc'''
        return   1
";
    let entities = extract(source);

    assert_eq!(entities.len(), 3);
    for entity in &entities {
        assert!(
            source.contains(&entity.source_text),
            "{} is not a substring",
            entity.name
        );
    }
    assert!(entities[0].source_text.contains("def spaced( a ,  b ):"));
}

#[test]
fn test_invalid_source_yields_nothing() {
    assert!(extract("def broken(:\n    pass").is_empty());
    assert!(extract("class :").is_empty());
    assert!(extract("def ok():\n    pass\n\ndef bad(\n").is_empty());
}

#[test]
fn test_python2_statements_yield_nothing() {
    assert!(extract("def f():\n    print \"hi\"\n").is_empty());
    assert!(extract("def run(code):\n    exec code\n").is_empty());
    assert!(extract("print \"module level\"\n\ndef g():\n    return 1\n").is_empty());
}

#[test]
fn test_print_call_is_not_mistaken_for_python2() {
    let entities = extract("def f():\n    print(\"hi\")\n");

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].source_text, "def f():\n    print(\"hi\")");
}

#[test]
fn test_trailing_comments_are_not_part_of_span() {
    let entities = extract("def f():\n    return 1\n    # note\n\nx = 1\n");

    assert_eq!(entities, vec![CodeEntity::function("f", "def f():\n    return 1")]);
}

#[test]
fn test_trailing_comments_excluded_from_classes_and_nested_blocks() {
    let source = "\
class Box:
    def open(self):
        if self.locked:
            raise RuntimeError(\"locked\")
        else:
            self.lid = None
            # lid removed
    # end of class

def after():
    return (1,
            2)  # pair
";

    let entities = extract(source);

    assert_eq!(entities.len(), 3);
    assert!(entities[0].source_text.ends_with("self.lid = None"));
    assert_eq!(entities[0].source_text, entities[0].source_text.trim_end());
    assert_eq!(entities[1].name, "Box.open");
    assert!(entities[1].source_text.ends_with("self.lid = None"));
    assert_eq!(entities[2].source_text, "def after():\n    return (1,\n            2)");
}

#[test]
fn test_blank_and_definition_free_sources() {
    assert!(extract("").is_empty());
    assert!(extract("   \n\n").is_empty());
    assert!(extract("x = 1\nprint(x)\n").is_empty());
}

#[test]
fn test_utf8_names_and_bodies() {
    let source = "def grüße(名前):\n    return f'hallo {名前}'";

    let entities = extract(source);

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].name, "grüße");
    assert_eq!(entities[0].source_text, source);
}

#[test]
fn test_extractor_metadata() {
    let extractor = PythonEntityExtractor::new();
    assert_eq!(extractor.language(), "python");
    assert_eq!(extractor.provider_name(), "tree-sitter-python");
}
