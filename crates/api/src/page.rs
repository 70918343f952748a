use atlas_core::TravelStyle;
use atlas_planner::{PlannerPage, TemplatePreset};
use atlas_render::Element;

const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f4ef; color: #1d1d1b; }
main { display: grid; gap: 1.5rem; grid-template-columns: minmax(18rem, 24rem) 1fr; padding: 2rem; }
.card { background: #fff; border-radius: 1rem; padding: 1.5rem; box-shadow: 0 1px 4px rgba(0,0,0,.08); }
.notice { background: #fde8e8; color: #8a1c1c; padding: .75rem 1rem; border-radius: .5rem; }
.template-pill { border: 1px solid #ccc; border-radius: 999px; background: #fff; padding: .3rem .8rem; cursor: pointer; }
.chip { display: inline-block; margin-right: .4rem; padding: .2rem .6rem; border-radius: 999px; background: #eee; }
.chip.accent { background: #1d5c4d; color: #fff; }
#results { opacity: 0; transform: translateY(8px); transition: opacity .4s ease, transform .4s ease; }
#results.results-visible { opacity: 1; transform: none; }
.city-hero { opacity: 0; transition: opacity .6s ease; margin: 0 0 1rem; }
.city-hero.city-hero--visible { opacity: 1; }
.city-hero img { width: 100%; max-height: 16rem; object-fit: cover; border-radius: .75rem; }
dl { display: grid; grid-template-columns: 1fr auto; gap: .3rem 1rem; }
.day-block { border-left: 3px solid #1d5c4d; padding-left: 1rem; margin-bottom: 1rem; }
.day-header { display: flex; justify-content: space-between; }
.day-title span:first-child { font-weight: 600; margin-right: .5rem; }
.slot { display: grid; grid-template-columns: 6rem 1fr auto; gap: .5rem; padding: .3rem 0; }
.slot-tag { font-size: .85rem; margin-right: .5rem; }
"#;

/// Full HTML document for the planner: form, quick-fill templates, notice
/// and the results card.
pub fn render_document(page: &PlannerPage, templates: &[TemplatePreset]) -> String {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(Element::new("title").with_text("Atlas trip planner"))
        .with_child(Element::new("style").with_text(STYLESHEET));

    let mut controls = Element::new("section")
        .with_class("card")
        .with_child(Element::new("h1").with_text("Plan a trip"))
        .with_child(planner_form(page))
        .with_child(templates_row(page, templates));

    if let Some(notice) = &page.notice {
        controls.append(
            Element::new("p")
                .with_class("notice")
                .with_attr("role", "alert")
                .with_text(notice.as_str()),
        );
    }

    let body = Element::new("body").with_child(
        Element::new("main")
            .with_child(controls)
            .with_child(page.results.assemble()),
    );

    let html = Element::new("html")
        .with_attr("lang", "en")
        .with_child(head)
        .with_child(body);

    format!("<!DOCTYPE html>{}", html.to_html())
}

fn planner_form(page: &PlannerPage) -> Element {
    let form = &page.form;

    let mut start_date = Element::region("input", "start-date")
        .with_attr("type", "date")
        .with_attr("name", "start-date")
        .with_attr("value", form.start_date.as_str());
    if let Some(min) = page.start_date_min {
        start_date.set_attr("min", min.format("%Y-%m-%d").to_string());
    }

    let selected_style = TravelStyle::parse_or_default(&form.style);
    let style_select = [TravelStyle::Budget, TravelStyle::Balanced, TravelStyle::Premium]
        .into_iter()
        .fold(Element::new("select").with_attr("name", "style"), |select, style| {
            let mut option = Element::new("option")
                .with_attr("value", style.as_str())
                .with_text(style.label());
            if style == selected_style {
                option.set_attr("selected", "selected");
            }
            select.with_child(option)
        });

    Element::region("form", "planner-form")
        .with_attr("method", "post")
        .with_attr("action", "/plan")
        .with_child(labelled(
            "Destination city",
            Element::new("input")
                .with_attr("type", "text")
                .with_attr("name", "city")
                .with_attr("value", form.city.as_str()),
        ))
        .with_child(labelled(
            "Days",
            Element::new("input")
                .with_attr("type", "number")
                .with_attr("min", "1")
                .with_attr("name", "days")
                .with_attr("value", form.days.as_str()),
        ))
        .with_child(labelled(
            "Budget (USD, optional)",
            Element::new("input")
                .with_attr("type", "number")
                .with_attr("min", "0")
                .with_attr("name", "budget")
                .with_attr("value", form.budget.as_str()),
        ))
        .with_child(labelled("Travel style", style_select))
        .with_child(labelled("Start date (optional)", start_date))
        .with_child(
            Element::new("button")
                .with_attr("type", "submit")
                .with_text("Plan my trip"),
        )
}

fn templates_row(page: &PlannerPage, templates: &[TemplatePreset]) -> Element {
    templates.iter().fold(
        Element::region("div", "templates-row"),
        |row, preset| {
            let button = Element::new("button")
                .with_class("template-pill")
                .with_attr("type", "submit")
                .with_attr("data-city", preset.city)
                .with_attr("data-days", preset.days)
                .with_attr("data-budget", preset.budget)
                .with_attr("data-style", preset.style)
                .with_text(preset.label);

            row.with_child(
                Element::new("form")
                    .with_attr("method", "post")
                    .with_attr("action", "/templates")
                    .with_child(hidden_input("id", preset.id))
                    .with_child(hidden_input("start-date", page.form.start_date.as_str()))
                    .with_child(button),
            )
        },
    )
}

fn labelled(label: &str, control: Element) -> Element {
    Element::new("label")
        .with_text(label)
        .with_child(control)
}

fn hidden_input(name: &str, value: &str) -> Element {
    Element::new("input")
        .with_attr("type", "hidden")
        .with_attr("name", name)
        .with_attr("value", value)
}
