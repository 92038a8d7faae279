use dominator::{svg, Dom};

fn lucide(size: u32, mut children: Vec<Dom>) -> Dom {
    svg!("svg", {
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", &size.to_string())
        .attr("height", &size.to_string())
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .class("icon")
        .children(&mut children)
    })
}

fn path(d: &str) -> Dom {
    svg!("path", {
        .attr("d", d)
    })
}

fn circle(cx: &str, cy: &str, r: &str) -> Dom {
    svg!("circle", {
        .attr("cx", cx)
        .attr("cy", cy)
        .attr("r", r)
    })
}

fn rect(x: &str, y: &str, width: &str, height: &str, rx: &str) -> Dom {
    svg!("rect", {
        .attr("x", x)
        .attr("y", y)
        .attr("width", width)
        .attr("height", height)
        .attr("rx", rx)
    })
}

pub fn leaf(size: u32) -> Dom {
    lucide(size, vec![
        path("M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"),
        path("M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"),
    ])
}

pub fn bar_chart(size: u32) -> Dom {
    lucide(size, vec![
        path("M3 3v18h18"),
        path("M18 17V9"),
        path("M13 17V5"),
        path("M8 17v-3"),
    ])
}

pub fn line_chart(size: u32) -> Dom {
    lucide(size, vec![path("M3 3v18h18"), path("m19 9-5 5-4-4-3 3")])
}

pub fn award(size: u32) -> Dom {
    lucide(size, vec![
        circle("12", "8", "7"),
        svg!("polyline", {
            .attr("points", "8.21 13.89 7 23 12 20 17 23 15.79 13.88")
        }),
    ])
}

pub fn shopping_bag(size: u32) -> Dom {
    lucide(size, vec![
        path("M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"),
        path("M3 6h18"),
        path("M16 10a4 4 0 0 1-8 0"),
    ])
}

pub fn layout_dashboard(size: u32) -> Dom {
    lucide(size, vec![
        rect("3", "3", "7", "9", "1"),
        rect("14", "3", "7", "5", "1"),
        rect("14", "12", "7", "9", "1"),
        rect("3", "16", "7", "5", "1"),
    ])
}

pub fn settings(size: u32) -> Dom {
    lucide(size, vec![
        path("M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"),
        circle("12", "12", "3"),
    ])
}

pub fn log_out(size: u32) -> Dom {
    lucide(size, vec![
        path("M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"),
        path("m16 17 5-5-5-5"),
        path("M21 12H9"),
    ])
}

pub fn bell(size: u32) -> Dom {
    lucide(size, vec![
        path("M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"),
        path("M10.3 21a1.94 1.94 0 0 0 3.4 0"),
    ])
}

pub fn user(size: u32) -> Dom {
    lucide(size, vec![
        path("M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"),
        circle("12", "7", "4"),
    ])
}

pub fn users(size: u32) -> Dom {
    lucide(size, vec![
        path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
        circle("9", "7", "4"),
        path("M22 21v-2a4 4 0 0 0-3-3.87"),
        path("M16 3.13a4 4 0 0 1 0 7.75"),
    ])
}

pub fn plus(size: u32) -> Dom {
    lucide(size, vec![path("M5 12h14"), path("M12 5v14")])
}

pub fn ticket(size: u32) -> Dom {
    lucide(size, vec![
        path("M2 9a3 3 0 0 1 0 6v2a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-2a3 3 0 0 1 0-6V7a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2Z"),
        path("M13 5v2"),
        path("M13 17v2"),
        path("M13 11v2"),
    ])
}

pub fn copy(size: u32) -> Dom {
    lucide(size, vec![
        rect("8", "8", "14", "14", "2"),
        path("M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"),
    ])
}

pub fn share(size: u32) -> Dom {
    lucide(size, vec![
        circle("18", "5", "3"),
        circle("6", "12", "3"),
        circle("18", "19", "3"),
        path("m8.59 13.51 6.83 3.98"),
        path("m15.41 6.51-6.82 3.98"),
    ])
}

pub fn trending_up(size: u32) -> Dom {
    lucide(size, vec![path("m22 7-8.5 8.5-5-5L2 17"), path("M16 7h6v6")])
}

pub fn trending_down(size: u32) -> Dom {
    lucide(size, vec![path("m22 17-8.5-8.5-5 5L2 7"), path("M16 17h6v-6")])
}

pub fn mail(size: u32) -> Dom {
    lucide(size, vec![
        rect("2", "4", "20", "16", "2"),
        path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
    ])
}

pub fn phone(size: u32) -> Dom {
    lucide(size, vec![
        path("M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"),
    ])
}

pub fn paperclip(size: u32) -> Dom {
    lucide(size, vec![
        path("m21.44 11.05-9.19 9.19a6 6 0 0 1-8.49-8.49l8.57-8.57A4 4 0 1 1 18 8.84l-8.59 8.57a2 2 0 0 1-2.83-2.83l8.49-8.48"),
    ])
}
