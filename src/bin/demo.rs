use std::io::Write;

use anyhow::{Result, Context};
use clap::Parser as ClapParser;
use htmlgen::{jq_page, warn::init_trace_from_env, Attributes, Node, RenderConfig, TagList,
              tags::{A, BR, H3, IMG}};
use rand::{prelude::thread_rng, seq::SliceRandom, Rng};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(clap::Parser, Debug)]
/// Print a page of links to randomly named pages and pictures.
struct Args {
    /// Number of links
    #[clap(long, default_value_t = 10)]
    count: usize,

    /// Page title
    #[clap(long, default_value = "Links Page")]
    title: String,

    /// Stylesheet to link, none if empty
    #[clap(long, default_value = "random.css")]
    css: String,

    /// Inserted between elements, e.g. a newline
    #[clap(long, default_value = "")]
    spacer: String,
}

fn random_name(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .filter_map(|_| LETTERS.choose(&mut *rng).map(|c| char::from(*c)))
        .collect()
}

fn links(names: &[String]) -> TagList {
    let mut l = TagList::default();
    for name in names {
        let img = IMG.attrs([("src", format!("{name}.jpg")),
                             ("alt", format!("a picture of {name}"))]);
        let a = A.call((img, name), [("href", format!("{name}.html"))]);
        l = l + (a + &*BR);
    }
    l
}

fn main() -> Result<()> {
    init_trace_from_env();
    let args = Args::parse();

    let mut rng = thread_rng();
    let names: Vec<String> = (0..args.count).map(|_| random_name(&mut rng, 10)).collect();

    let page = jq_page(&args.title,
                       Some(args.css.as_str()),
                       (H3.with("Links to Random Stuff"), links(&names)),
                       Attributes::new());
    let config = RenderConfig::with_spacer(&args.spacer);

    let mut outp = std::io::stdout().lock();
    writeln!(&mut outp, "{}", page.to_html_string_with(&config))
        .context("writing to stdout")?;
    outp.flush()?;
    Ok(())
}
