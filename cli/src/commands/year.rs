use sacristan_common::config::Config;
use sacristan_common::liturgy::season::SundayCycle;
use sacristan_common::success;
use sacristan_core::calendar::LiturgicalYear;

use crate::terminal::{format, print};

pub fn year(year: i32, cfg: &Config) -> anyhow::Result<()> {
    let anchors = LiturgicalYear::compute(year)?;

    print::tree_head(0, &format!("Año {}", anchors.year));
    print::as_tree_one_level(format::year_to_details(&anchors));

    if cfg.quiet == 0 {
        print::fat_separator();
    }
    let next_cycle = SundayCycle::from_liturgical_year(year + 1);
    success!(
        "Ciclo {} ({}) desde el {}",
        next_cycle,
        next_cycle.evangelist(),
        anchors.advent_start.long_label()
    );
    Ok(())
}
