//! Document chrome shared by every page

pub const CONTENT_TYPE: &str = "text/html; charset=UTF-8";

const STYLESHEET: &str = "\
img { border: 0px; }\r\n\
a:link, a:visited, a:active { text-decoration: none; color: #000000 }\r\n\
a:hover { text-decoration: underline; color: #cc3333 }\r\n\
body { margin: 4px auto; width: 600px; font: 75% Verdana, Arial, Helvetica, sans-serif; }\r\n\
#box { background: #cccc99; }\r\n\
.roundtop, .roundbottom { background: #ffffff; }\r\n\
.r1, .r2, .r3, .r4 { height: 1px; overflow: hidden; background: #cccc99; \
border-left: 1px solid #000000; border-right: 1px solid #000000; }\r\n\
.r1 { margin: 0 5px; background: #000000; }\r\n\
.r2 { margin: 0 3px; border-width: 0 2px; }\r\n\
.r3 { margin: 0 2px; }\r\n\
.r4 { margin: 0 1px; height: 2px; }\r\n\
.content, .content3 { padding-left: 3px; border-left: 1px solid #000000; \
border-right: 1px solid #000000; }\r\n\
.content3 { height: 60px; }\r\n\
.logo { padding: 2px; width: 60px; height: 56px; float: left; }\r\n\
.over { float: left; }\r\n\
#menu { margin: 0; padding: 0; }\r\n\
#menu li { display: inline; list-style-type: none; }\r\n\
#menu a { padding: 1.15em 0.8em; text-decoration: none; }\r\n";

pub fn html_header(title: &str) -> String {
    format!(
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \
         \"http://www.w3.org/TR/html4/strict.dtd\">\r\n\
         <html><head>\r\n\
         <title>{}</title>\r\n\
         <meta http-equiv=\"Content-Type\" content=\"{}\">\r\n\
         <style type=\"text/css\">\r\n{}</style>\r\n\
         </head><body>\r\n",
        super::sanitize::escape_title(title),
        CONTENT_TYPE,
        STYLESHEET
    )
}

pub fn html_footer() -> &'static str {
    "</body></html>\r\n"
}

pub fn box_top(id: &str) -> String {
    format!(
        "<div id=\"{id}\"><div class=\"roundtop\">\
         <div class=\"r1\"></div><div class=\"r2\"></div>\
         <div class=\"r3\"></div><div class=\"r4\"></div></div>"
    )
}

pub fn box_bottom() -> &'static str {
    "<div class=\"roundbottom\">\
     <div class=\"r4\"></div><div class=\"r3\"></div>\
     <div class=\"r2\"></div><div class=\"r1\"></div></div></div>"
}

/// `content` wrapped in a rounded box followed by a line break
pub fn boxed(content: &str) -> String {
    format!("{}{}{}<br>\r\n", box_top("box"), content, box_bottom())
}

pub fn top_menu() -> String {
    boxed(
        "<div class=\"content\"><ul id=\"menu\">\
         <li><a href=\"/\">TV Guide</a></li>\
         <li><a href=\"/pvrlog\">Recordings</a></li>\
         </ul></div>",
    )
}

/// Complete document: header, menu, `body`, footer
pub fn document(title: &str, body: &str) -> String {
    let mut page = html_header(title);
    page.push_str(&top_menu());
    page.push_str(body);
    page.push_str(html_footer());
    page
}
