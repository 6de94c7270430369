use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use raster_colorizer::{ramp, Bounds, Color, ColorBreakpoint, Colorizer,
                       Ramp, RampType, Scale};
use rgb::RGBA8;
use tracing::info;

type Err = Box<dyn Error>;

fn gray(c: Color) -> Color {
    let RGBA8 { r, g, b, a } = RGBA8::from(c);
    let y = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)).round();
    Color::new(y, y, y, f64::from(a) / 255.)
}

fn table_of_colors(fh: &mut impl Write, colors: &[Color],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 c.to_css_string())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 gray(c).to_css_string())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

/// Breakpoints with their values underneath.
fn legend(fh: &mut impl Write, bps: &[ColorBreakpoint],
          comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for b in bps {
        writeln!(fh, "  <td style=\"width: 40px; height: 30px; \
                      background-color: {}\"></td>",
                 b.color.to_css_string())?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr><tr>")?;
    for b in bps {
        writeln!(fh, "  <td style=\"font-size: 9px\">{:.3}</td>", b.value)?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

/// Evaluate `colorizer` at `n` values evenly spread over `bounds`.
fn strip(fh: &mut impl Write, colorizer: &Colorizer, bounds: Bounds,
         n: usize, comment: &str) -> Result<(), Err> {
    let dt = (bounds.max - bounds.min) / (n - 1) as f64;
    let colors: Vec<_> = (0 .. n)
        .map(|i| colorizer.get_color(bounds.min + i as f64 * dt))
        .collect();
    table_of_colors(fh, &colors, 1, comment)
}

fn main() -> Result<(), Err> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let path = "legend.html";
    let mut fh = BufWriter::new(File::create(path)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>raster_colorizer: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Reference ramps</h3>")?;
    for (title, typ) in [("sequential", RampType::Seq), ("diverging", RampType::Div)] {
        for name in Ramp::names_of(typ) {
            let ramp = Ramp::named(name)?;
            let comment = format!("{name}, {title} ({} colors)", ramp.len());
            table_of_colors(&mut fh, ramp.colors(), 40, &comment)?;
        }
    }

    writeln!(fh, "<h3>Sampled breakpoints</h3>")?;
    let viridis = Ramp::named("viridis")?;
    let bounds = Bounds::new(1., 1000.);
    for (scale, steps) in [(Scale::Linear, 8), (Scale::Logarithmic, 8),
                           (Scale::Linear, 16)] {
        let bps = ramp::sample(viridis.colors(), steps, bounds, scale, false)?;
        legend(&mut fh, &bps, &format!("viridis, {scale:?}, {steps} steps"))?;
        let colorizer = Colorizer::gradient(scale, bps, Color::TRANSPARENT,
                                            Color::WHITE, Color::BLACK);
        strip(&mut fh, &colorizer, bounds, 300,
              &format!("{} (evaluated)", colorizer.type_name()))?;
    }
    let bps = ramp::sample(viridis.colors(), 8, bounds, Scale::Linear, true)?;
    legend(&mut fh, &bps, "viridis, reversed")?;

    writeln!(fh, "<h3>Percentiles</h3>")?;
    let magma = Ramp::named("magma")?;
    let bps = ramp::sample_values(magma.colors(), &[0., 2., 3., 5., 9., 20., 50.], false)?;
    legend(&mut fh, &bps, "magma at percentiles")?;

    writeln!(fh, "<h3>Gray scale</h3>")?;
    strip(&mut fh, &Colorizer::gray_scale(Bounds::new(0., 1.)), Bounds::new(0., 1.),
          300, "gray_scale")?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    info!(path, "legend written");
    Ok(())
}
