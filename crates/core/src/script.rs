//! Runtime script generation.
//!
//! Emits one self-contained vanilla script covering three independent
//! concerns: pointer tilt, YouTube feed refresh, and analytics beacons.
//! Each concern is its own IIFE and degrades independently; the analytics
//! section is omitted from the emitted source entirely unless the site has
//! an active [`AnalyticsConfig`], so unconfigured exports ship no dead
//! network code.
//!
//! [`AnalyticsConfig`]: crate::model::AnalyticsConfig

use crate::model::SiteData;

/// Generates the runtime script for a site.
pub fn runtime_script(site: &SiteData) -> String {
    let mut js = String::with_capacity(12 * 1024);
    js.push_str(TILT_JS);
    js.push('\n');
    js.push_str(FEED_JS);
    if let Some(analytics) = &site.profile.analytics {
        if analytics.is_active() {
            js.push('\n');
            js.push_str(&analytics_script(&analytics.endpoint, &analytics.site_id));
        }
    }
    js
}

/// Injects endpoint and site id as JSON string literals so arbitrary
/// configured values cannot escape the script context.
fn analytics_script(endpoint: &str, site_id: &str) -> String {
    ANALYTICS_JS
        .replace("__ENDPOINT__", &js_string(endpoint))
        .replace("__SITE_ID__", &js_string(site_id))
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}

const TILT_JS: &str = r#"// Pointer-driven 3D tilt on block tiles.
(function () {
  'use strict';
  var MAX_TILT = 10;
  var tiles = document.querySelectorAll('[data-tilt]');
  tiles.forEach(function (tile) {
    var glare = tile.querySelector('.block-glare');
    tile.addEventListener('mousemove', function (event) {
      var rect = tile.getBoundingClientRect();
      var x = (event.clientX - rect.left) / rect.width - 0.5;
      var y = (event.clientY - rect.top) / rect.height - 0.5;
      var rotateY = Math.max(-MAX_TILT, Math.min(MAX_TILT, x * 2 * MAX_TILT));
      var rotateX = Math.max(-MAX_TILT, Math.min(MAX_TILT, -y * 2 * MAX_TILT));
      tile.style.transform = 'perspective(600px) rotateX(' + rotateX + 'deg) rotateY(' + rotateY + 'deg)';
      if (glare) {
        glare.style.opacity = '1';
        glare.style.background = 'radial-gradient(circle at ' + ((x + 0.5) * 100) + '% ' + ((y + 0.5) * 100) + '%, rgba(255,255,255,0.35), transparent 60%)';
      }
    });
    tile.addEventListener('mouseleave', function () {
      tile.style.transform = '';
      if (glare) { glare.style.opacity = '0'; }
    });
  });
})();
"#;

const FEED_JS: &str = r#"// Progressive refresh of YouTube feed tiles through a public CORS proxy.
// Every failure path leaves the baked markup untouched.
(function () {
  'use strict';
  var FETCH_TIMEOUT_MS = 8000;
  var placeholders = document.querySelectorAll('[data-channel-id]');
  if (!placeholders.length) { return; }

  function parseFeed(text, limit) {
    var doc = new DOMParser().parseFromString(text, 'application/xml');
    var entries = doc.getElementsByTagName('entry');
    var videos = [];
    for (var i = 0; i < entries.length && videos.length < limit; i++) {
      var idNode = entries[i].getElementsByTagNameNS('*', 'videoId')[0];
      var titleNode = entries[i].getElementsByTagName('title')[0];
      if (!idNode || !titleNode) { continue; }
      var id = idNode.textContent || '';
      if (!/^[A-Za-z0-9_-]{11}$/.test(id)) { continue; }
      videos.push({
        id: id,
        title: titleNode.textContent || '',
        thumbnail: 'https://i.ytimg.com/vi/' + id + '/hqdefault.jpg'
      });
    }
    return videos;
  }

  function cell(video, mode) {
    var link = document.createElement('a');
    link.href = 'https://www.youtube.com/watch?v=' + video.id;
    link.target = '_blank';
    link.rel = 'noopener noreferrer';
    if (mode === 'grid') {
      link.className = 'yt-cell';
      link.style.backgroundImage = 'url(' + video.thumbnail + ')';
      var span = document.createElement('span');
      span.className = 'yt-cell-title';
      span.textContent = video.title;
      link.appendChild(span);
    } else {
      link.className = 'yt-row';
      var img = document.createElement('img');
      img.className = 'yt-row-thumb';
      img.src = video.thumbnail;
      img.alt = '';
      img.loading = 'lazy';
      var title = document.createElement('span');
      title.className = 'yt-row-title';
      title.textContent = video.title;
      link.appendChild(img);
      link.appendChild(title);
    }
    return link;
  }

  function replaceBody(el, node) {
    var header = el.querySelector('.yt-header');
    el.innerHTML = '';
    if (header) { el.appendChild(header); }
    el.appendChild(node);
  }

  function apply(el, videos, mode) {
    if (!videos.length) { return; }
    if (mode === 'single') {
      var frame = document.createElement('iframe');
      frame.className = 'yt-embed';
      frame.src = 'https://www.youtube-nocookie.com/embed/' + videos[0].id;
      frame.loading = 'lazy';
      frame.allowFullscreen = true;
      frame.title = videos[0].title;
      replaceBody(el, frame);
      return;
    }
    var wrap = document.createElement('div');
    wrap.className = mode === 'grid' ? 'yt-grid' : 'yt-list';
    videos.forEach(function (video) { wrap.appendChild(cell(video, mode)); });
    replaceBody(el, wrap);
  }

  placeholders.forEach(function (el) {
    var channel = el.getAttribute('data-channel-id') || '';
    var mode = el.getAttribute('data-yt-mode') || 'grid';
    var limit = parseInt(el.getAttribute('data-yt-limit') || '4', 10) || 4;
    if (!/^UC[A-Za-z0-9_-]{22}$/.test(channel)) { return; }
    var feed = 'https://www.youtube.com/feeds/videos.xml?channel_id=' + channel;
    var proxied = 'https://api.allorigins.win/raw?url=' + encodeURIComponent(feed);
    var controller = new AbortController();
    var timer = setTimeout(function () { controller.abort(); }, FETCH_TIMEOUT_MS);
    fetch(proxied, { signal: controller.signal })
      .then(function (response) {
        if (!response.ok) { throw new Error('feed ' + response.status); }
        return response.text();
      })
      .then(function (text) { apply(el, parseFeed(text, limit), mode); })
      .catch(function () {})
      .then(function () { clearTimeout(timer); });
  });
})();
"#;

const ANALYTICS_JS: &str = r#"// Analytics beacons: page views, block clicks, session summary.
(function () {
  'use strict';
  var config = { endpoint: __ENDPOINT__, siteId: __SITE_ID__ };
  var startedAt = Date.now();
  var maxScrollPct = 0;
  var sessionEnded = false;

  function randomId() {
    if (window.crypto && crypto.randomUUID) { return crypto.randomUUID(); }
    return 'id-' + Math.random().toString(36).slice(2) + Date.now().toString(36);
  }

  function persistentId() {
    try {
      var stored = localStorage.getItem('gridbio_visitor');
      if (stored) { return stored; }
      var fresh = randomId();
      localStorage.setItem('gridbio_visitor', fresh);
      return fresh;
    } catch (err) {
      return randomId();
    }
  }

  var visitorId = persistentId();
  var sessionId = randomId();

  function utmParams() {
    var params = new URLSearchParams(location.search);
    var utm = {};
    ['utm_source', 'utm_medium', 'utm_campaign', 'utm_term', 'utm_content'].forEach(function (key) {
      var value = params.get(key);
      if (value) { utm[key] = value; }
    });
    return utm;
  }

  function send(eventType, extra) {
    var payload = {
      siteId: config.siteId,
      eventType: eventType,
      visitorId: visitorId,
      sessionId: sessionId,
      url: location.href,
      referrer: document.referrer,
      utm: utmParams(),
      userAgent: navigator.userAgent,
      locale: navigator.language,
      screen: { width: screen.width, height: screen.height },
      viewport: { width: window.innerWidth, height: window.innerHeight },
      timestamp: new Date().toISOString()
    };
    if (extra) {
      Object.keys(extra).forEach(function (key) { payload[key] = extra[key]; });
    }
    var body = JSON.stringify(payload);
    try {
      if (navigator.sendBeacon) {
        navigator.sendBeacon(config.endpoint, new Blob([body], { type: 'application/json' }));
      } else {
        fetch(config.endpoint, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: body,
          keepalive: true
        }).catch(function () {});
      }
    } catch (err) {
      // Beacons must never break the page.
    }
  }

  window.addEventListener('scroll', function () {
    var doc = document.documentElement;
    var scrollable = doc.scrollHeight - window.innerHeight;
    if (scrollable <= 0) { return; }
    var pct = Math.round((window.scrollY / scrollable) * 100);
    if (pct > maxScrollPct) { maxScrollPct = Math.min(100, pct); }
  }, { passive: true });

  document.addEventListener('click', function (event) {
    var link = event.target.closest ? event.target.closest('.grid a') : null;
    if (!link) { return; }
    var tile = link.closest('[data-block-id]');
    send('click', { blockId: tile ? tile.getAttribute('data-block-id') : null, href: link.href });
  });

  function endSession() {
    if (sessionEnded) { return; }
    sessionEnded = true;
    var duration = Date.now() - startedAt;
    send('session_end', {
      duration: duration,
      maxScroll: maxScrollPct,
      engaged: duration > 10000 && maxScrollPct > 25
    });
  }

  document.addEventListener('visibilitychange', function () {
    if (document.visibilityState === 'hidden') { endSession(); }
  });
  window.addEventListener('pagehide', endSession);

  send('page_view');
})();
"#;
