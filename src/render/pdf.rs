use crate::errors::AppResult;
use crate::models::StackedChart;
use crate::render::axis::{y_max, y_ticks};
use crate::render::colors::{ColorKey, Rgb};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::f32::consts::FRAC_1_SQRT_2;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);
const GRID: Rgb = Rgb(0.88, 0.88, 0.88);
const OUTLINE: Rgb = Rgb(0.45, 0.45, 0.45);

/// Stacked bar chart writer: one bar per day, one block per event slot.
pub struct ChartPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin_left: f32,
    margin_right: f32,
    margin_top: f32,
    margin_bottom: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    label_font_size: f32,
    title_font_size: f32,
}

impl Default for ChartPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // A4 landscape
            page_w: 842.0,
            page_h: 595.0,
            margin_left: 70.0,
            margin_right: 140.0,
            margin_top: 60.0,
            margin_bottom: 80.0,

            next_id,
            font_id,

            font_size: 10.0,
            label_font_size: 7.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Plot rectangle: (x0, y0, width, height).
    fn plot_area(&self) -> (f32, f32, f32, f32) {
        (
            self.margin_left,
            self.margin_bottom,
            self.page_w - self.margin_left - self.margin_right,
            self.page_h - self.margin_top - self.margin_bottom,
        )
    }

    /// Rough Helvetica advance width, good enough for alignment.
    fn text_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        self.draw_text_matrix(content, [1.0, 0.0, 0.0, 1.0, x, y], size, text);
    }

    fn draw_text_matrix(&self, content: &mut Content, matrix: [f32; 6], size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix(matrix);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_line(&self, content: &mut Content, from: (f32, f32), to: (f32, f32), color: Rgb, width: f32) {
        content.save_state();
        content.set_stroke_rgb(color.0, color.1, color.2);
        content.set_line_width(width);
        content.move_to(from.0, from.1);
        content.line_to(to.0, to.1);
        content.stroke();
        content.restore_state();
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_block(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Rgb,
        edge: Rgb,
    ) {
        content.save_state();
        content.set_fill_rgb(fill.0, fill.1, fill.2);
        content.set_stroke_rgb(edge.0, edge.1, edge.2);
        content.set_line_width(0.5);
        content.rect(x, y, w, h);
        content.fill_nonzero_and_stroke();
        content.restore_state();
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize, total: usize) {
        self.draw_text(
            content,
            self.margin_left,
            self.page_h - self.margin_top + 25.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {} of {}", page, total);
        self.draw_text(
            content,
            self.page_w - self.margin_right,
            20.0,
            self.font_size,
            &pg,
        );
    }

    /// Hourly gridlines and 12-hour labels on the y axis.
    fn draw_y_axis(&self, content: &mut Content, scale: f32) {
        let (x0, y0, w, _) = self.plot_area();

        for (secs, label) in y_ticks() {
            let y = y0 + secs as f32 * scale;
            self.draw_line(content, (x0, y), (x0 + w, y), GRID, 0.4);
            self.draw_line(content, (x0 - 4.0, y), (x0, y), BLACK, 0.6);

            let tw = Self::text_width(&label, self.label_font_size);
            self.draw_text(content, x0 - 6.0 - tw, y - 2.5, self.label_font_size, &label);
        }
    }

    fn draw_frame(&self, content: &mut Content) {
        let (x0, y0, w, h) = self.plot_area();
        self.draw_line(content, (x0, y0), (x0, y0 + h), BLACK, 0.8);
        self.draw_line(content, (x0, y0), (x0 + w, y0), BLACK, 0.8);
    }

    /// Day label under a bar, rotated 45° and ending at the bar centre.
    fn draw_x_label(&self, content: &mut Content, center_x: f32, label: &str) {
        let (_, y0, _, _) = self.plot_area();
        let c = FRAC_1_SQRT_2;
        let run = Self::text_width(label, self.label_font_size) * c;
        let matrix = [c, c, -c, c, center_x - run, y0 - 8.0 - run];
        self.draw_text_matrix(content, matrix, self.label_font_size, label);
    }

    fn draw_legend(&self, content: &mut Content, chart: &StackedChart, key: &ColorKey) -> AppResult<()> {
        let (x0, y0, w, h) = self.plot_area();
        let x = x0 + w + 20.0;
        let mut y = y0 + h - 12.0;

        self.draw_text(content, x, y, self.font_size, "Legend");
        y -= 18.0;

        for tag in chart.tags_in_use() {
            let color = key.resolve(tag)?;
            self.draw_block(content, x, y - 1.0, 10.0, 10.0, color, OUTLINE);
            let text = format!("{}  {}", tag, tag.describe());
            self.draw_text(content, x + 16.0, y, self.font_size, &text);
            y -= 16.0;
        }

        Ok(())
    }

    /// Draw the chart over as many pages as needed, `days_per_page` bars each.
    ///
    /// Every tag is checked against the color key before anything is drawn.
    pub fn write_chart(
        &mut self,
        chart: &StackedChart,
        key: &ColorKey,
        title: &str,
        days_per_page: usize,
    ) -> AppResult<()> {
        key.ensure_covers(&chart.tags_in_use())?;

        let day_count = chart.day_count();
        let per_page = days_per_page.max(1).min(day_count.max(1));

        let totals = chart.day_totals();
        let (x0, y0, plot_w, plot_h) = self.plot_area();
        let scale = plot_h / y_max(&totals) as f32;
        let bar_w = plot_w / per_page as f32;

        let mut ranges: Vec<(usize, usize)> = (0..day_count)
            .step_by(per_page)
            .map(|start| (start, (start + per_page).min(day_count)))
            .collect();
        if ranges.is_empty() {
            ranges.push((0, 0));
        }
        let total_pages = ranges.len();

        for (page_idx, (start, end)) in ranges.into_iter().enumerate() {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_idx + 1, total_pages);
            self.draw_y_axis(&mut content, scale);

            for day in start..end {
                let x = x0 + (day - start) as f32 * bar_w;

                for row in &chart.rows {
                    let duration = row.durations[day];
                    if duration == 0 {
                        continue;
                    }
                    let fill = key.resolve(row.tags[day])?;
                    let y = y0 + row.baselines[day] as f32 * scale;
                    self.draw_block(&mut content, x, y, bar_w, duration as f32 * scale, fill, WHITE);
                }

                self.draw_x_label(&mut content, x + bar_w / 2.0, &chart.labels[day]);
            }

            self.draw_frame(&mut content);
            self.draw_legend(&mut content, chart, key)?;
            self.finalize_page(content);
        }

        Ok(())
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
