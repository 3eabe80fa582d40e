//! Templates for terminal output.
//!
//! Rendered with `trim_blocks` and `lstrip_blocks`, so block tags may sit on
//! their own lines without leaking newlines. Padding for column alignment is
//! computed in Rust and passed in as `padding`.

pub const BADGES_TEMPLATE: &str = r#"{% for badge in badges %}
{% if not loop.first %}

{% endif %}
{{ badge.label | style("label") }} {{ ("(" ~ badge.category ~ ")") | style("muted") }}
{{ badge.output | style("snippet") }}
{% endfor %}
"#;

pub const BADGE_PAIR_TEMPLATE: &str = r#"{{ label | style("label") }} {{ ("(" ~ category ~ ")") | style("muted") }}

{{ "Markdown" | style("heading") }}
{{ markdown | style("snippet") }}

{{ "HTML" | style("heading") }}
{{ html | style("snippet") }}
"#;

pub const MISSES_TEMPLATE: &str = r#"{% for miss in misses %}
{{ ("Badge '" ~ miss.name ~ "' was not found in " ~ miss.category ~ ".") | style("error") }}
{% if miss.elsewhere %}
{{ ("'" ~ miss.elsewhere.badge ~ "' is in the '" ~ miss.elsewhere.category ~ "' category.") | style("info") }}
{% endif %}
{% if miss.suggestions %}
{{ "Did you mean:" | style("info") }}
{% for s in miss.suggestions %}
  {{ s.id | style("suggestion") }}{{ s.padding }}  {{ s.label | style("muted") }}
{% endfor %}
{% elif not miss.elsewhere %}
{{ ("Run mdb show " ~ miss.category_id ~ " to see its badges.") | style("muted") }}
{% endif %}
{% if miss.spaced %}
{{ "Badge names use dashes, not spaces (e.g. apple music -> apple-music)." | style("info") }}
{% endif %}
{% endfor %}
"#;

pub const SEARCH_TEMPLATE: &str = r#"{% if empty %}
{{ "No results." | style("info") }}
{% else %}
{% for r in results %}
{{ r.id | style("badge_id") }}{{ r.padding }}  {{ r.category | style("muted") }}{{ r.category_padding }}  {{ ("mdb " ~ r.category ~ " " ~ r.id) | style("muted") }}
{% endfor %}
{% endif %}
"#;

pub const CATEGORIES_TEMPLATE: &str = r#"{{ "Categories" | style("heading") }}
{% for c in categories %}
  {{ c.label | style("label") }}{{ c.padding }}  {{ c.id | style("badge_id") }}{{ c.id_padding }}  {{ (c.count ~ " badges") | style("muted") }}
{% endfor %}
"#;

pub const LISTING_TEMPLATE: &str = r#"{{ title | style("heading") }}
{% for b in badges %}
  {{ b.id | style("badge_id") }}{{ b.padding }}  {{ b.label | style("muted") }}
{% endfor %}
"#;

pub const CONFIG_TEMPLATE: &str = r#"{% for entry in entries %}
{{ entry.key | style("label") }}{{ entry.padding }}  {{ entry.value }}
{% endfor %}
"#;

pub const MESSAGES_TEMPLATE: &str = r#"{% for message in messages %}
{{ message.content | style(message.style) }}
{% endfor %}
"#;
