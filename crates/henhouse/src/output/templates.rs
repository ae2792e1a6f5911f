//! Built-in templates.
//!
//! Each entry is `(name, source)`. Templates see the command's data as
//! their context and may use the `style`, `pad`, `rpad` and `num` filters.

pub const TEMPLATES: &[(&str, &str)] = &[
    ("eggs/list", EGGS_LIST),
    ("eggs/stats", EGGS_STATS),
    ("eggs/houses", EGGS_HOUSES),
    ("blog/list", BLOG_LIST),
    ("blog/show", BLOG_SHOW),
    ("faq/list", FAQ_LIST),
    ("about/show", ABOUT_SHOW),
    ("message", MESSAGE),
];

/// Template variables: the `EggListView` fields.
const EGGS_LIST: &str = r##"{{ "Egg records" | style("header") }}
{% if records | length == 0 %}
{{ "No egg records match these filters." | style("muted") }}
{% else %}
{{ "#" | rpad(4) | style("label") }}  {{ "Date" | pad(10) | style("label") }}  {{ "House" | pad(14) | style("label") }}  {{ "Eggs" | rpad(7) | style("label") }}  {{ "Dead" | rpad(4) | style("label") }}  {{ "Broken" | rpad(6) | style("label") }}  {{ "Birds" | rpad(6) | style("label") }}  {{ "Feed" | rpad(6) | style("label") }}  {{ "Trays" | rpad(5) | style("label") }}  {{ "Rate" | rpad(6) | style("label") }}  {{ "Recorded by" | style("label") }}
{% for r in records %}
{{ r.sequenceNumber | rpad(4) }}  {{ r.date | pad(10) }}  {{ r.house | pad(14) | style("house") }}  {{ r.totalEggs | num | rpad(7) | style("count") }}  {{ r.mortality | num | rpad(4) }}  {{ r.brokenEggs | num | rpad(6) }}  {{ r.chickenCount | num | rpad(6) }}  {{ r.foodAmount | num | rpad(6) }}  {{ r.trayCount | num | rpad(5) }}  {{ r.percentage | num | rpad(6) }}  {{ r.recordedBy }}
{% endfor %}
{% endif %}

{{ ("Showing " ~ showingFrom ~ " to " ~ showingTo ~ " of " ~ totalItems ~ " records") | style("muted") }}
{{ ("Page " ~ currentPage ~ " of " ~ totalPages) | style("muted") }}
{% if distinctHouses | length > 0 %}
{{ "Houses:" | style("label") }} {{ distinctHouses | join(", ") }}
{% endif %}
"##;

/// Template variables: the `DashboardStats` fields.
const EGGS_STATS: &str = r#"{{ "Production overview" | style("header") }}
{{ "Records" | pad(18) | style("label") }} {{ recordCount }}
{{ "Total eggs" | pad(18) | style("label") }} {{ totalEggs | num | style("count") }}
{{ "Mortality" | pad(18) | style("label") }} {{ totalMortality | num }}
{{ "Broken eggs" | pad(18) | style("label") }} {{ totalBrokenEggs | num }}
{{ "Recorders" | pad(18) | style("label") }} {{ distinctRecorders }}
{{ "Estimated sales" | pad(18) | style("label") }} {{ estimatedSales | num }}
{{ ("Eggs on " ~ today) | pad(18) | style("label") }} {{ todayEggs | num }}

{{ (currentMonth.month ~ " target") | style("header") }}
{{ currentMonth.produced | num }} of {{ currentMonth.target | num }} eggs ({{ currentMonth.percent | num }}%)

{{ "Monthly production" | style("header") }}
{% for m in monthly %}
{{ m.month | pad(10) | style("label") }} {{ m.eggs | num | rpad(9) }}
{% endfor %}
"#;

/// Template variables: `houses` (list of names).
const EGGS_HOUSES: &str = r#"{% if houses | length == 0 %}
{{ "No houses match these filters." | style("muted") }}
{% else %}
{% for house in houses %}
{{ house | style("house") }}
{% endfor %}
{% endif %}
"#;

/// Template variables: `posts` (list of blogs).
const BLOG_LIST: &str = r#"{% if posts | length == 0 %}
{{ "No blog posts yet." | style("muted") }}
{% else %}
{% for post in posts %}
{{ post.title | style("header") }}  {{ post.date | style("muted") }}
  {{ post.id | style("muted") }}
{% endfor %}
{% endif %}
"#;

/// Template variables: the `Blog` fields.
const BLOG_SHOW: &str = r#"{{ title | style("header") }}
{{ date | style("muted") }}
{{ "Image:" | style("label") }} {{ imageUrl }}

{{ content }}
"#;

/// Template variables: `entries` (list of FAQ entries).
const FAQ_LIST: &str = r#"{% if entries | length == 0 %}
{{ "No questions yet." | style("muted") }}
{% else %}
{% for entry in entries %}
{{ ("Q: " ~ entry.question) | style("header") }}
A: {{ entry.answer }}
{{ entry.id | style("muted") }}
{% if not loop.last %}

{% endif %}
{% endfor %}
{% endif %}
"#;

/// Template variables: `content`, `updatedAt`.
const ABOUT_SHOW: &str = r#"{% if content %}
{{ content }}
{% if updatedAt %}

{{ ("Updated " ~ updatedAt) | style("muted") }}
{% endif %}
{% else %}
{{ "The about page has not been written yet." | style("muted") }}
{% endif %}
"#;

/// Template variables: the `Message` fields.
const MESSAGE: &str = r#"{{ text | style("success") }}
"#;
