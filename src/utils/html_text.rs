// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! HTML 预处理
//!
//! 去除导航、脚本、样式等非正文元素，并在不递归的前提下
//! 测量文档嵌套深度、收集纯文本。

use std::collections::{HashMap, HashSet};

use scraper::{Html, Node, Selector};

/// 非正文元素
const BOILERPLATE_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "svg", "iframe", "nav", "header", "footer",
    "aside", "form", "button", "select",
];

fn is_boilerplate(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|element| BOILERPLATE_TAGS.contains(&element.name()))
}

/// 合并连续空白为单个空格并去除首尾空白
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 文档的最大元素嵌套深度
///
/// 先序遍历，父节点总在子节点之前出现，因此只需记录每个节点的深度
pub fn nesting_depth(html: &str) -> usize {
    let document = Html::parse_document(html);
    let mut depths = HashMap::new();
    let mut deepest = 0;

    for node in document.tree.root().descendants() {
        let depth = node
            .parent()
            .and_then(|parent| depths.get(&parent.id()).copied())
            .map_or(0, |depth: usize| depth + 1);
        deepest = deepest.max(depth);
        depths.insert(node.id(), depth);
    }

    deepest
}

/// 收集 `<body>` 中非样板元素的文本，空白合并为单个空格
///
/// 没有 `<body>` 时退回到整个文档
pub fn flat_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next())
        .map(|body| *body)
        .unwrap_or_else(|| document.tree.root());

    let mut skipped = HashSet::new();
    let mut text = String::new();

    for node in body.descendants() {
        let parent_skipped = node
            .parent()
            .is_some_and(|parent| skipped.contains(&parent.id()));
        if parent_skipped || is_boilerplate(node.value()) {
            skipped.insert(node.id());
            continue;
        }
        if let Node::Text(fragment) = node.value() {
            text.push_str(fragment);
            // Adjacent cells and inline blocks must not run together
            text.push(' ');
        }
    }

    collapse_whitespace(&text)
}

/// 删除样板元素后重新序列化文档
pub fn strip_boilerplate(html: &str) -> String {
    let mut document = Html::parse_document(html);
    let ids = document
        .tree
        .root()
        .descendants()
        .filter(|node| is_boilerplate(node.value()))
        .map(|node| node.id())
        .collect::<Vec<_>>();

    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    document.html()
}
