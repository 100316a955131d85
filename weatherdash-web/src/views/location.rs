use maud::{Markup, PreEscaped, html};
use weatherdash_core::LocationIndicator;

use super::icons;

// Browser half of the geolocation sync: one request per page load, success
// hands the raw position to `/location`, failure only updates the indicator.
const GEOLOCATION_SCRIPT: &str = r#"
(function () {
  var box = document.getElementById("location-status");
  if (!box) return;
  var text = box.querySelector("[data-status]");
  function idle() {
    box.classList.remove("locating");
    text.textContent = "Location access required for local weather";
  }
  if (!("geolocation" in navigator)) return;
  box.classList.add("locating");
  text.textContent = "Locating...";
  navigator.geolocation.getCurrentPosition(
    function (position) {
      var q = new URLSearchParams();
      q.set("latitude", position.coords.latitude);
      q.set("longitude", position.coords.longitude);
      q.set("return", window.location.search.replace(/^\?/, ""));
      window.location.replace("/location?" + q.toString());
    },
    function (error) {
      console.error("Geolocation error:", error);
      idle();
    }
  );
})();
"#;

pub fn location_status(indicator: LocationIndicator) -> Markup {
    let locating = indicator == LocationIndicator::Locating;

    html! {
        div #location-status .locating[locating] {
            div.dot { (icons::map_pin("")) }
            p data-status { (indicator.message()) }
        }
        script { (PreEscaped(GEOLOCATION_SCRIPT)) }
    }
}
